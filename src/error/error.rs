//! Main error type for the bunny.net client.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::{ApiError, ErrorKind};

/// The error type for bunny.net client operations.
///
/// ## Error Hierarchy
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (remote `Api` vs. client kinds)
/// ├── message: String          (human-readable description)
/// ├── status_code: Option      (HTTP status, when a response was received)
/// ├── api: Option<ApiError>    (structured body of a remote error)
/// └── source: Option           (underlying cause of a client error)
/// ```
///
/// `Error` is `Clone`: the underlying cause is reference-counted so a
/// [`PageIterator`](crate::PageIterator) can keep its failure inspectable
/// while also returning it to the caller.
///
/// ## Example
///
/// ```rust
/// use bunnynet::{ApiError, Error, ErrorKind};
///
/// fn describe(err: &Error) -> String {
///     match err.api_error() {
///         Some(api) => format!("rejected by API: {}", api.error_key),
///         None => format!("client failure ({}): {}", err.kind(), err),
///     }
/// }
///
/// let remote = Error::api(ApiError {
///     error_key: "dnszone.not_found".into(),
///     field: "Id".into(),
///     message: "The zone does not exist".into(),
///     status_code: 404,
/// });
/// assert_eq!(describe(&remote), "rejected by API: dnszone.not_found");
/// assert_eq!(remote.status_code(), Some(404));
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    status_code: Option<u16>,
    api: Option<Box<ApiError>>,
    source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, message: message.into(), status_code: None, api: None, source: None }
    }

    /// Creates a remote error from a decoded API error document.
    pub fn api(api: ApiError) -> Self {
        Self {
            kind: ErrorKind::Api,
            message: Cow::Owned(api.message.clone()),
            status_code: Some(api.status_code),
            api: Some(Box::new(api)),
            source: None,
        }
    }

    /// Creates the fallback error for an error status whose body could not
    /// be decoded.
    pub fn unexpected_status(status_code: u16) -> Self {
        let mut err = Self::new(
            ErrorKind::UnexpectedStatus,
            format!("bunnynet API error: status code {}", status_code),
        );
        err.status_code = Some(status_code);
        err
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates an encode error.
    pub fn encode(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Encode, message)
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Creates a cancelled error.
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "request cancelled")
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message without the source chain.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code, if a response was received.
    #[inline]
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Returns the structured API error for remote errors.
    #[inline]
    pub fn api_error(&self) -> Option<&ApiError> {
        self.api.as_deref()
    }

    /// Returns the API error key for remote errors.
    #[inline]
    pub fn error_key(&self) -> Option<&str> {
        self.api.as_deref().map(|api| api.error_key.as_str())
    }

    /// Returns `true` if the API rejected the request.
    #[inline]
    pub fn is_api(&self) -> bool {
        self.kind.is_api()
    }

    /// Returns `true` if the failure happened inside the client.
    #[inline]
    pub fn is_client(&self) -> bool {
        self.kind.is_client()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref api) = self.api {
            return fmt::Display::fmt(api, f);
        }

        f.write_str(&self.message)?;
        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ApiError> for Error {
    fn from(api: ApiError) -> Self {
        Error::api(api)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration("failed to parse URL").with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::decode("failed to parse response body").with_source(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let base = if err.is_timeout() {
            Error::timeout("request timed out")
        } else if err.is_connect() {
            Error::connection("failed to connect")
        } else if err.is_decode() || err.is_body() {
            Error::decode("failed to read response body")
        } else {
            Error::transport("failed to send request")
        };
        base.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiError {
        ApiError {
            error_key: "x.not_found".into(),
            field: "Id".into(),
            message: "not found".into(),
            status_code: 404,
        }
    }

    #[test]
    fn test_api_error() {
        let err = Error::api(not_found());
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.is_api());
        assert!(!err.is_client());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.error_key(), Some("x.not_found"));
        assert_eq!(err.api_error().map(|a| a.field.as_str()), Some("Id"));
        assert_eq!(err.to_string(), "[404] x.not_found: not found (Id)");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_unexpected_status() {
        let err = Error::unexpected_status(500);
        assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
        assert!(err.is_client());
        assert_eq!(err.status_code(), Some(500));
        assert!(err.api_error().is_none());
        assert_eq!(err.to_string(), "bunnynet API error: status code 500");
    }

    #[test]
    fn test_client_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "underlying error");
        let err = Error::transport("failed to send request").with_source(io_err);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "failed to send request: underlying error");
        assert_eq!(err.message(), "failed to send request");
    }

    #[test]
    fn test_client_error_without_source() {
        let err = Error::encode("failed to encode request body");
        assert_eq!(err.to_string(), "failed to encode request body");
        assert!(err.status_code().is_none());
    }

    #[test]
    fn test_clone_shares_source() {
        let err = Error::decode("bad body")
            .with_source(std::io::Error::new(std::io::ErrorKind::InvalidData, "eof"));
        let cloned = err.clone();
        assert_eq!(cloned.kind(), ErrorKind::Decode);
        assert_eq!(cloned.to_string(), err.to_string());
        assert!(cloned.source().is_some());
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = parse_err.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().starts_with("failed to parse response body: "));
    }

    #[test]
    fn test_cancelled() {
        let err = Error::cancelled();
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert!(err.is_client());
        assert!(err.kind().is_transport());
    }
}
