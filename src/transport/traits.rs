//! Transport trait definitions and common types.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::Error;

/// A fully built request, ready to be executed by an [`HttpTransport`].
///
/// Produced by [`build_request`](crate::request::build_request); query
/// parameters may be appended afterwards with
/// [`add_query_params`](crate::request::add_query_params).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: Method,
    /// The absolute request URL, including any query string.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// JSON body, present only for POST, PUT and PATCH requests with a body.
    pub body: Option<Bytes>,
    /// Deadline for the whole round-trip.
    pub timeout: Option<Duration>,
}

/// A response as returned by an [`HttpTransport`].
///
/// The body has been read in full by the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body bytes.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a response with the given status and body and no headers.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self { status, headers: HeaderMap::new(), body: body.into() }
    }

    /// Creates a `200 OK` response with a JSON body.
    pub fn json(value: &impl serde::Serialize) -> Result<Self, Error> {
        let body = serde_json::to_vec(value)
            .map_err(|e| Error::encode("failed to encode response body").with_source(e))?;
        Ok(Self::new(StatusCode::OK, body))
    }
}

/// Executes [`HttpRequest`]s.
///
/// Implementations must be safe to share between tasks; the client holds a
/// single transport behind an `Arc` and issues concurrent requests through
/// it. Transport failures (connection, TLS, deadline) must be reported as
/// client-kind [`Error`]s. A transport never interprets the status code.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and reads the full response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}
