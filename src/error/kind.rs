//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// Exactly one kind, [`ErrorKind::Api`], describes a failure reported by
/// bunny.net itself. Every other kind describes something that went wrong
/// inside the client: before the request reached the wire, on the wire, or
/// while reading the reply.
///
/// | ErrorKind          | Origin | Typical cause                          |
/// |--------------------|--------|----------------------------------------|
/// | `Api`              | Remote | 4xx/5xx with a structured error body   |
/// | `UnexpectedStatus` | Client | 4xx/5xx whose body could not be parsed |
/// | `Configuration`    | Client | Invalid base URL or header value       |
/// | `Encode`           | Client | Request body could not be serialized   |
/// | `Decode`           | Client | Success body could not be parsed       |
/// | `Connection`       | Client | DNS, TLS handshake, connection refused |
/// | `Timeout`          | Client | Per-request deadline elapsed           |
/// | `Cancelled`        | Client | Cancellation token fired               |
/// | `Transport`        | Client | Any other transport-level failure      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The API understood the request and rejected it.
    ///
    /// The error carries an [`ApiError`](crate::ApiError) with the
    /// machine-readable key, the offending field and the HTTP status.
    #[error("api error")]
    Api,

    /// The API answered with an error status but the body was not a
    /// recognizable error document.
    ///
    /// Only the HTTP status code is available.
    #[error("unexpected status")]
    UnexpectedStatus,

    /// Invalid client configuration (base URL, header values).
    #[error("configuration error")]
    Configuration,

    /// The request body could not be encoded as JSON. The request was
    /// never sent.
    #[error("encode error")]
    Encode,

    /// A successful response body could not be read or decoded.
    #[error("decode error")]
    Decode,

    /// Connection error (DNS, TLS handshake, connection refused).
    #[error("connection error")]
    Connection,

    /// The request did not complete before its deadline.
    #[error("timeout")]
    Timeout,

    /// The request was cancelled by the caller.
    #[error("cancelled")]
    Cancelled,

    /// Any other failure while executing the request.
    #[error("transport error")]
    Transport,
}

impl ErrorKind {
    /// Returns `true` if this kind describes a failure reported by the API.
    #[inline]
    pub fn is_api(&self) -> bool {
        matches!(self, ErrorKind::Api)
    }

    /// Returns `true` if this kind describes a failure inside the client.
    #[inline]
    pub fn is_client(&self) -> bool {
        !self.is_api()
    }

    /// Returns `true` if the failure happened on the network path
    /// (connection, deadline, cancellation or other transport failure).
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connection | ErrorKind::Timeout | ErrorKind::Cancelled | ErrorKind::Transport
        )
    }
}
