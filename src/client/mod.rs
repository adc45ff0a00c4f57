//! Client types for the bunny.net API.
//!
//! - [`Client`]: Top-level client, owns the transport and the access key
//! - Resource services, obtained from the client:
//!   [`countries`](Client::countries), [`api_keys`](Client::api_keys),
//!   [`dns_zones`](Client::dns_zones), [`pull_zones`](Client::pull_zones),
//!   [`purge`](Client::purge)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bunnynet::prelude::*;
//!
//! # async fn example() -> bunnynet::Result<()> {
//! let client = Client::builder().api_key("your-access-key").build()?;
//!
//! let zones = client.dns_zones().list_all(0, None).await?;
//! for zone in &zones {
//!     println!("{} ({} records)", zone.domain, zone.records.len());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, HasApiKey, NoApiKey};

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::AccessKey;
use crate::cancellation::CancellationToken;
use crate::config::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_PAGE};
use crate::pagination::{PageIterator, PaginatedResponse, Pagination};
use crate::request::{QueryEncodable, add_query_params, set_json_body};
use crate::resources::{
    ApiKeysClient, CountriesClient, DnsZonesClient, PullZonesClient, PurgeClient,
};
use crate::response::{
    is_error_status, parse_error_response, parse_paginated_response, parse_response,
};
use crate::transport::{HttpRequest, HttpResponse};
use crate::{Error, Result};

/// Typed `None` for requests without a body.
pub(crate) const NO_BODY: Option<&()> = None;

/// Per-handle overrides set by [`Client::with_timeout`] and
/// [`Client::with_cancellation`].
#[derive(Debug, Clone, Default)]
struct CallOptions {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

/// The bunny.net API client.
///
/// This is the main entry point. Create a client with
/// [`Client::builder()`], [`Client::new`] or [`Client::from_env`], then
/// obtain resource services from it.
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Clones share the transport (and
/// its connection pool) and the access key, so a key rotated through one
/// clone is used by every clone for requests built afterwards.
///
/// ## Scoped Handles
///
/// [`with_timeout`](Self::with_timeout) and
/// [`with_cancellation`](Self::with_cancellation) return handles that share
/// everything with the original but apply a different deadline or
/// cancellation signal to the requests they issue.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
    options: CallOptions,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoApiKey> {
        ClientBuilder::new()
    }

    /// Creates a client with default settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<AccessKey>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a client from `BUNNYNET_API_KEY` and, if set,
    /// `BUNNYNET_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `BUNNYNET_API_KEY` is unset or empty,
    /// or if `BUNNYNET_BASE_URL` is not a valid URL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::configuration(format!("{} is not set", API_KEY_ENV)))?;

        let mut builder = Self::builder().api_key(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self { inner: Arc::new(inner), options: CallOptions::default() }
    }

    /// Returns the base URL of the client.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Returns the timeout applied to requests from this handle.
    pub fn timeout(&self) -> Duration {
        self.options.timeout.unwrap_or(self.inner.timeout)
    }

    /// Rotates the access key.
    ///
    /// Requests already built keep the old key; every request built
    /// afterwards, through any clone of this client, uses the new one.
    pub fn set_api_key(&self, api_key: impl Into<AccessKey>) {
        self.inner.set_api_key(api_key.into());
        tracing::debug!("access key rotated");
    }

    /// Returns a handle whose requests use `timeout` instead of the
    /// client default.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut scoped = self.clone();
        scoped.options.timeout = Some(timeout);
        scoped
    }

    /// Returns a handle whose requests are aborted when `token` fires.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut scoped = self.clone();
        scoped.options.cancellation = Some(token);
        scoped
    }

    /// Service for `/country`.
    pub fn countries(&self) -> CountriesClient {
        CountriesClient::new(self.clone())
    }

    /// Service for `/apikey`.
    pub fn api_keys(&self) -> ApiKeysClient {
        ApiKeysClient::new(self.clone())
    }

    /// Service for `/dnszone`.
    pub fn dns_zones(&self) -> DnsZonesClient {
        DnsZonesClient::new(self.clone())
    }

    /// Service for `/pullzone`.
    pub fn pull_zones(&self) -> PullZonesClient {
        PullZonesClient::new(self.clone())
    }

    /// Service for `/purge`.
    pub fn purge(&self) -> PurgeClient {
        PurgeClient::new(self.clone())
    }

    /// Builds an authenticated request for `path` with the current key.
    ///
    /// See [`build_request`](crate::request::build_request) for the header
    /// and body rules.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        self.inner.build_request(method, path, body)
    }

    /// Sends a request and rejects error statuses.
    ///
    /// The request's own timeout wins over this handle's. A fired
    /// cancellation token aborts the in-flight request. Nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`Api`](crate::ErrorKind::Api) or
    ///   [`UnexpectedStatus`](crate::ErrorKind::UnexpectedStatus) for status
    ///   400 and above
    /// - [`Timeout`](crate::ErrorKind::Timeout) when the deadline passes
    /// - [`Cancelled`](crate::ErrorKind::Cancelled) when the token fires
    /// - any transport error
    pub async fn execute(&self, mut request: HttpRequest) -> Result<HttpResponse> {
        if self.options.cancellation.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Err(Error::cancelled());
        }

        let timeout = request.timeout.unwrap_or_else(|| self.timeout());
        request.timeout = Some(timeout);

        let method = request.method.clone();
        let path = request.url.path().to_owned();
        tracing::debug!(%method, path = %path, "sending request");

        let send = tokio::time::timeout(timeout, self.inner.transport.send(request));
        let outcome = match self.options.cancellation {
            Some(ref token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(%method, path = %path, "request cancelled");
                    return Err(Error::cancelled());
                },
                outcome = send => outcome,
            },
            None => send.await,
        };
        let response = outcome.map_err(|_| Error::timeout("request timed out"))??;

        tracing::debug!(
            %method,
            path = %path,
            status = response.status.as_u16(),
            "received response"
        );

        if is_error_status(response.status) {
            return Err(parse_error_response(&response));
        }
        Ok(response)
    }

    async fn send<B, Q>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
        body: Option<&B>,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
        Q: QueryEncodable + ?Sized,
    {
        let mut request = self.new_request(method, path, body)?;
        add_query_params(&mut request, query);
        self.execute(request).await
    }

    /// Sends a request and decodes the JSON response; `204` yields
    /// `R::default()`.
    pub(crate) async fn call<B, Q, R>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        Q: QueryEncodable + ?Sized,
        R: DeserializeOwned + Default,
    {
        let response = self.send(method, path, query, body).await?;
        Ok(parse_response(&response)?.unwrap_or_default())
    }

    /// Sends a request whose response body is of no interest.
    pub(crate) async fn call_empty<B, Q>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
        Q: QueryEncodable + ?Sized,
    {
        self.send(method, path, query, body).await.map(drop)
    }

    /// Sends a request and returns the raw response body.
    pub(crate) async fn call_bytes<Q>(&self, method: Method, path: &str, query: &Q) -> Result<Bytes>
    where
        Q: QueryEncodable + ?Sized,
    {
        let response = self.send(method, path, query, NO_BODY).await?;
        Ok(response.body)
    }

    /// Sends a `DELETE` that carries a JSON body.
    pub(crate) async fn delete_with_body<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.new_request(Method::DELETE, path, NO_BODY)?;
        set_json_body(&mut request, body)?;
        self.execute(request).await.map(drop)
    }

    /// Fetches one page of `path`.
    pub(crate) async fn get_page<T, Q>(
        &self,
        path: &str,
        pagination: Pagination,
        query: &Q,
    ) -> Result<PaginatedResponse<T>>
    where
        T: DeserializeOwned,
        Q: QueryEncodable + ?Sized,
    {
        let mut request = self.new_request(Method::GET, path, NO_BODY)?;
        add_query_params(&mut request, &pagination);
        add_query_params(&mut request, query);
        let response = self.execute(request).await?;
        parse_paginated_response(&response)
    }

    /// Creates an iterator over every page of `path`.
    pub(crate) fn paginate<T, Q>(
        &self,
        path: impl Into<String>,
        query: Q,
        per_page: u32,
    ) -> PageIterator<T>
    where
        T: DeserializeOwned + Send + 'static,
        Q: QueryEncodable + Clone + Send + Sync + 'static,
    {
        let client = self.clone();
        let path = path.into();
        PageIterator::new(
            move |page, per_page| {
                let client = client.clone();
                let path = path.clone();
                let query = query.clone();
                async move {
                    let pagination = Pagination::new().with_page(page).with_per_page(per_page);
                    client.get_page(&path, pagination, &query).await
                }
            },
            DEFAULT_PAGE,
            per_page,
        )
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.timeout())
            .field("cancellable", &self.options.cancellation.is_some())
            .finish_non_exhaustive()
    }
}
