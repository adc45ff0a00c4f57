//! Common test harness for bunnynet integration tests.
//!
//! Provides a mock API server fixture and canned response bodies.

use std::sync::Once;

use anyhow::{Context, Result};
use bunnynet::Client;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Access key every fixture client is built with.
pub const TEST_KEY: &str = "integration-test-key";

static TRACING: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`, once per process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mock API server and a client pointed at it.
pub struct TestFixture {
    /// The mock server.
    pub server: MockServer,
    /// Client using [`TEST_KEY`] against `server`.
    pub client: Client,
}

impl TestFixture {
    /// Starts a server and builds a client for it.
    pub async fn start() -> Result<Self> {
        init_tracing();
        let server = MockServer::start().await;
        let client = Client::builder()
            .api_key(TEST_KEY)
            .base_url(server.uri())
            .user_agent("bunnynet-integration-tests")
            .build()
            .context("failed to build client for mock server")?;
        Ok(Self { server, client })
    }

    /// Serves `pages` from `GET resource`, one mock per page number.
    ///
    /// Each entry is the list of items of that page. Every page but the last
    /// reports more items.
    #[allow(dead_code)]
    pub async fn mount_pages(&self, resource: &str, pages: &[Vec<Value>]) {
        let total: usize = pages.iter().map(Vec::len).sum();
        for (index, items) in pages.iter().enumerate() {
            let page = index + 1;
            Mock::given(method("GET"))
                .and(path(resource))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                    items.clone(),
                    page,
                    total,
                    page < pages.len(),
                )))
                .mount(&self.server)
                .await;
        }
    }

    /// Number of requests the server has received for `resource`.
    #[allow(dead_code)]
    pub async fn request_count(&self, resource: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == resource)
            .count()
    }
}

/// A paginated response body.
pub fn page_body(
    items: Vec<Value>,
    current_page: usize,
    total_items: usize,
    has_more: bool,
) -> Value {
    json!({
        "Items": items,
        "CurrentPage": current_page,
        "TotalItems": total_items,
        "HasMoreItems": has_more
    })
}

/// An API error body.
#[allow(dead_code)]
pub fn error_body(key: &str, field: &str, message: &str) -> Value {
    json!({"ErrorKey": key, "Field": field, "Message": message})
}

/// An API key record with the given id.
#[allow(dead_code)]
pub fn api_key(id: i64) -> Value {
    json!({"Id": id, "Key": format!("key-{id}"), "Roles": ["User"]})
}
