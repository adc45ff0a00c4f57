//! Cache purging by URL.

use std::collections::BTreeMap;

use reqwest::Method;

use crate::client::{Client, NO_BODY};
use crate::request::QueryEncodable;
use crate::Result;

/// Options for purging a URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurgeOptions {
    /// URL to purge from the cache.
    pub url: String,
    /// Return before the purge has completed.
    pub async_: bool,
}

impl PurgeOptions {
    /// Creates options for a synchronous purge of `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), async_: false }
    }

    /// Sets whether the call returns before the purge has completed.
    #[must_use]
    pub fn with_async(mut self, async_: bool) -> Self {
        self.async_ = async_;
        self
    }
}

impl QueryEncodable for PurgeOptions {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("url".to_owned(), self.url.clone());
        if self.async_ {
            params.insert("async".to_owned(), "true".to_owned());
        }
        params
    }
}

/// Client for cache purge operations.
///
/// Access via `client.purge()`.
#[derive(Clone)]
pub struct PurgeClient {
    client: Client,
}

impl PurgeClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Purges a URL from the CDN cache.
    ///
    /// The URL may end in a `*` wildcard.
    pub async fn purge_url(&self, options: &PurgeOptions) -> Result<()> {
        self.client.call_empty(Method::POST, "/purge", options, NO_BODY).await
    }

    /// Shorthand for [`purge_url`](Self::purge_url).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example(client: bunnynet::Client) -> bunnynet::Result<()> {
    /// client.purge().purge("https://cdn.example.com/style.css", false).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn purge(&self, url: &str, async_: bool) -> Result<()> {
        self.purge_url(&PurgeOptions::new(url).with_async(async_)).await
    }
}

impl std::fmt::Debug for PurgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurgeClient").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod wiremock_tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use reqwest::StatusCode;

    use crate::transport::{HttpResponse, MockTransport};

    #[tokio::test]
    async fn test_purge_sends_query_without_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/purge"))
            .and(query_param("url", "https://cdn.example.com/a b.js"))
            .and(query_param("async", "true"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::builder().api_key("k").base_url(server.uri()).build().unwrap();
        client.purge().purge("https://cdn.example.com/a b.js", true).await.unwrap();
    }

    #[tokio::test]
    async fn test_purge_request_shape() {
        let transport = std::sync::Arc::new(MockTransport::new());
        transport.push_response(HttpResponse::new(StatusCode::OK, ""));
        let client = Client::builder().api_key("k").transport(transport.clone()).build().unwrap();

        client.purge().purge("https://cdn.example.com/a.js", false).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert!(request.body.is_none());
        assert!(request.headers.get("Content-Type").is_none());
        assert_eq!(request.url.query(), Some("url=https%3A%2F%2Fcdn.example.com%2Fa.js"));
    }
}
