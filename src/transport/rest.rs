//! HTTP transport implementation using reqwest.

use std::time::Duration;

use crate::Error;
use crate::transport::traits::{HttpRequest, HttpResponse, HttpTransport};

/// Transport backed by a shared [`reqwest::Client`].
///
/// `reqwest::Client` pools connections internally and is cheap to clone,
/// so a single `RestTransport` serves every service of a client.
#[derive(Clone)]
pub struct RestTransport {
    client: reqwest::Client,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport").finish_non_exhaustive()
    }
}

impl RestTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| Error::configuration("failed to create HTTP client").with_source(e))?;
        Ok(Self { client })
    }

    /// Creates a transport that reuses an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl HttpTransport for RestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self.client.request(request.method, request.url).headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(Error::from)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                Error::timeout("request timed out").with_source(e)
            } else {
                Error::decode("failed to read response body").with_source(e)
            }
        })?;

        Ok(HttpResponse { status, headers, body })
    }
}
