//! Internal client implementation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::Method;
use serde::Serialize;

use crate::auth::AccessKey;
use crate::request::build_request;
use crate::transport::{HttpRequest, HttpTransport};
use crate::Result;

/// State shared by every handle and service of one client.
pub(crate) struct ClientInner {
    /// Base URL that resource paths replace the path of.
    pub base_url: String,

    /// `User-Agent` header value; empty disables the header.
    pub user_agent: String,

    /// Default per-request timeout.
    pub timeout: Duration,

    /// Current access key. Swapped by `Client::set_api_key`.
    pub api_key: RwLock<AccessKey>,

    /// Executes requests.
    pub transport: Arc<dyn HttpTransport>,
}

impl ClientInner {
    /// Builds an authenticated request with the key current at call time.
    ///
    /// The key is copied into the request headers while the read lock is
    /// held, so a concurrent rotation affects only later requests.
    pub(crate) fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        let api_key = self.api_key.read();
        build_request(method, &self.base_url, path, body, api_key.expose(), &self.user_agent)
    }

    /// Replaces the access key.
    pub(crate) fn set_api_key(&self, api_key: AccessKey) {
        *self.api_key.write() = api_key;
    }
}

impl std::fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("api_key", &*self.api_key.read())
            .finish_non_exhaustive()
    }
}
