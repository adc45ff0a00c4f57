//! Mock transport implementation for testing.
//!
//! This module provides a mock transport that operates entirely in-memory,
//! allowing tests to run without network dependencies.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use reqwest::StatusCode;

use super::traits::{HttpRequest, HttpResponse, HttpTransport};
use crate::Error;

/// How the mock answers when its response queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    /// Reply `404 Not Found` with an empty body.
    NotFound,
    /// Reply `200 OK` with the request body.
    Echo,
}

/// Mock transport for testing.
///
/// Responses are served from a FIFO queue. Every request is recorded and
/// can be inspected with [`requests`](Self::requests). When the queue is
/// empty the mock either replies `404` or, in echo mode, returns the
/// request body as a `200` response.
pub struct MockTransport {
    /// Queued responses or failures.
    responses: RwLock<VecDeque<Result<HttpResponse, Error>>>,
    /// Recorded requests.
    requests: RwLock<Vec<HttpRequest>>,
    /// Request counter.
    request_count: AtomicU64,
    fallback: Fallback,
}

impl MockTransport {
    /// Creates a new mock transport with an empty queue.
    pub fn new() -> Self {
        Self::with_fallback(Fallback::NotFound)
    }

    /// Creates a mock that echoes request bodies back as `200 OK`.
    pub fn echo() -> Self {
        Self::with_fallback(Fallback::Echo)
    }

    fn with_fallback(fallback: Fallback) -> Self {
        Self {
            responses: RwLock::new(VecDeque::new()),
            requests: RwLock::new(Vec::new()),
            request_count: AtomicU64::new(0),
            fallback,
        }
    }

    /// Queues a response.
    pub fn push_response(&self, response: HttpResponse) {
        self.responses.write().push_back(Ok(response));
    }

    /// Queues a `200 OK` response with a JSON body.
    pub fn push_json(&self, value: &impl serde::Serialize) -> Result<(), Error> {
        self.push_response(HttpResponse::json(value)?);
        Ok(())
    }

    /// Queues a failure to simulate on a future request.
    pub fn push_failure(&self, error: Error) {
        self.responses.write().push_back(Err(error));
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Returns a copy of every request received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.read().clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.read().last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("queued", &self.responses.read().len())
            .field("request_count", &self.request_count())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        let body = request.body.clone();
        self.requests.write().push(request);

        if let Some(queued) = self.responses.write().pop_front() {
            return queued;
        }

        Ok(match self.fallback {
            Fallback::NotFound => HttpResponse::new(StatusCode::NOT_FOUND, ""),
            Fallback::Echo => HttpResponse::new(StatusCode::OK, body.unwrap_or_default()),
        })
    }
}

/// Shared mock transport for use across async contexts.
pub type SharedMockTransport = Arc<MockTransport>;

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::ErrorKind;

    fn request(body: Option<&'static [u8]>) -> HttpRequest {
        HttpRequest {
            method: Method::POST,
            url: url::Url::parse("https://api.bunny.net/dnszone").unwrap(),
            headers: Default::default(),
            body: body.map(bytes::Bytes::from_static),
            timeout: None,
        }
    }

    #[tokio::test]
    async fn test_queued_responses_in_order() {
        let transport = MockTransport::new();
        transport.push_response(HttpResponse::new(StatusCode::CREATED, "a"));
        transport.push_response(HttpResponse::new(StatusCode::OK, "b"));

        let first = transport.send(request(None)).await.unwrap();
        let second = transport.send(request(None)).await.unwrap();
        assert_eq!(first.status, StatusCode::CREATED);
        assert_eq!(&second.body[..], b"b");
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_queue_is_not_found() {
        let transport = MockTransport::default();
        let response = transport.send(request(Some(b"{}"))).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_echo_returns_request_body() {
        let transport = MockTransport::echo();
        let response = transport.send(request(Some(br#"{"Domain":"example.com"}"#))).await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(&response.body[..], br#"{"Domain":"example.com"}"#);
    }

    #[tokio::test]
    async fn test_failure_simulation() {
        let transport = MockTransport::new();
        transport.push_failure(Error::connection("simulated failure"));

        let err = transport.send(request(None)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);

        // Failure is consumed by one request
        let response = transport.send(request(None)).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_records_requests() {
        let transport = MockTransport::new();
        transport.send(request(Some(b"1"))).await.unwrap();
        transport.send(request(Some(b"2"))).await.unwrap();

        assert_eq!(transport.requests().len(), 2);
        let last = transport.last_request().unwrap();
        assert_eq!(last.body.as_deref(), Some(&b"2"[..]));
    }

    #[test]
    fn test_push_json() {
        let transport = MockTransport::new();
        transport.push_json(&serde_json::json!({"Id": 1})).unwrap();
        assert!(format!("{:?}", transport).contains("queued: 1"));
    }
}
