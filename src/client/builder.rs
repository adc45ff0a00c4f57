//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use parking_lot::RwLock;

use super::inner::ClientInner;
use crate::{
    Client, Error,
    auth::AccessKey,
    config::ClientConfig,
    transport::{HttpTransport, RestTransport},
};

/// Marker type: access key not yet provided.
pub struct NoApiKey;

/// Marker type: access key has been provided.
pub struct HasApiKey;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so that `build()` is only available once an
/// access key has been provided.
///
/// ## Required Configuration
///
/// - `api_key()`: The bunny.net access key
///
/// ## Optional Configuration
///
/// - `base_url()`: API endpoint (default `https://api.bunny.net`)
/// - `user_agent()`: `User-Agent` header value
/// - `timeout()`: Per-request timeout (default 30s)
/// - `config()`: All of the above at once, as a [`ClientConfig`]
/// - `http_client()`: A preconfigured `reqwest::Client`
/// - `transport()`: A custom [`HttpTransport`]
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use bunnynet::Client;
///
/// let client = Client::builder()
///     .api_key("your-access-key")
///     .base_url("https://api.bunny.net")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), bunnynet::Error>(())
/// ```
pub struct ClientBuilder<KeyState> {
    api_key: Option<AccessKey>,
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    _key_state: PhantomData<KeyState>,
}

impl ClientBuilder<NoApiKey> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            api_key: None,
            config: ClientConfig::default(),
            http_client: None,
            transport: None,
            _key_state: PhantomData,
        }
    }

    /// Sets the access key sent in the `AccessKey` header.
    ///
    /// # Example
    ///
    /// ```rust
    /// let builder = bunnynet::Client::builder().api_key("your-access-key");
    /// ```
    pub fn api_key(self, api_key: impl Into<AccessKey>) -> ClientBuilder<HasApiKey> {
        ClientBuilder {
            api_key: Some(api_key.into()),
            config: self.config,
            http_client: self.http_client,
            transport: self.transport,
            _key_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoApiKey> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ClientBuilder<K> {
    /// Sets the API base URL.
    ///
    /// Resource paths replace the path of this URL, so only scheme, host
    /// and port are significant.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Sets the `User-Agent` header. An empty value omits the header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Sets the default per-request timeout.
    ///
    /// A request that does not complete in time fails with
    /// [`ErrorKind::Timeout`](crate::ErrorKind::Timeout).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Replaces base URL, user agent and timeout at once.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses a preconfigured `reqwest::Client` for the default transport.
    ///
    /// Its own timeouts apply in addition to [`timeout`](Self::timeout).
    #[must_use]
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Uses a custom transport. Takes precedence over
    /// [`http_client`](Self::http_client).
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl ClientBuilder<HasApiKey> {
    /// Builds the client.
    ///
    /// No request is made; the first network access happens on the first
    /// service call.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if:
    /// - The base URL is invalid or not `http`/`https`
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<Client, Error> {
        let api_key = self.api_key.ok_or_else(|| Error::configuration("access key is required"))?;

        // Validate URL first
        let parsed_url = url::Url::parse(&self.config.base_url)
            .map_err(|e| Error::configuration("invalid base URL").with_source(e))?;
        if !matches!(parsed_url.scheme(), "http" | "https") || parsed_url.cannot_be_a_base() {
            return Err(Error::configuration(format!(
                "base URL must be an http or https URL: {}",
                self.config.base_url
            )));
        }

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(http_client)) => Arc::new(RestTransport::from_client(http_client)),
            (None, None) => Arc::new(RestTransport::new(self.config.timeout)?),
        };

        let inner = ClientInner {
            base_url: self.config.base_url,
            user_agent: self.config.user_agent,
            timeout: self.config.timeout,
            api_key: RwLock::new(api_key),
            transport,
        };

        Ok(Client::from_inner(inner))
    }
}

impl<K> std::fmt::Debug for ClientBuilder<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key)
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}
