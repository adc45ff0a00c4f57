//! Country lookup.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Client, NO_BODY};
use crate::pagination::{PageIterator, PaginatedResponse, Pagination};
use crate::Result;

/// A country known to bunny.net, with its tax data and points of presence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Country {
    /// Country name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub iso_code: String,
    /// Whether the country is in the European Union.
    #[serde(rename = "IsEU")]
    pub is_eu: bool,
    /// Tax rate in percent.
    pub tax_rate: f64,
    /// Prefix of tax identifiers.
    pub tax_prefix: String,
    /// URL of the flag image.
    pub flag_url: String,
    /// Points of presence located in the country.
    pub pop_list: Vec<String>,
}

/// Client for country operations.
///
/// Access via `client.countries()`.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn example(client: bunnynet::Client) -> bunnynet::Result<()> {
/// let countries = client.countries();
///
/// for country in countries.list().await? {
///     println!("{} ({})", country.name, country.iso_code);
/// }
///
/// let germany = countries.get("DE").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CountriesClient {
    client: Client,
}

impl CountriesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists every country in one unpaginated request.
    pub async fn list(&self) -> Result<Vec<Country>> {
        self.client.call(Method::GET, "/country", &(), NO_BODY).await
    }

    /// Fetches one page of countries.
    pub async fn list_paginated(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Country>> {
        self.client.get_page("/country", pagination, &()).await
    }

    /// Returns an iterator over all pages. A `per_page` of 0 uses the default.
    pub fn pages(&self, per_page: u32) -> PageIterator<Country> {
        self.client.paginate("/country", (), per_page)
    }

    /// Fetches every country page by page.
    pub async fn list_all(&self, per_page: u32) -> Result<Vec<Country>> {
        self.pages(per_page).all_items().await
    }

    /// Returns the country with the given ISO code.
    pub async fn get(&self, iso_code: &str) -> Result<Country> {
        let path = format!("/country/{}", urlencoding::encode(iso_code));
        self.client.call(Method::GET, &path, &(), NO_BODY).await
    }
}

impl std::fmt::Debug for CountriesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountriesClient").finish_non_exhaustive()
    }
}
