//! Error document returned by the bunny.net API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A failure reported by the bunny.net API.
///
/// The API answers failed requests with a JSON body of the form
/// `{"ErrorKey": "...", "Field": "...", "Message": "..."}`. The HTTP status
/// is not part of that document; the client attaches it from the response.
///
/// ## Example
///
/// ```rust
/// use bunnynet::ApiError;
///
/// let err: ApiError = serde_json::from_str(
///     r#"{"ErrorKey":"pullzone.not_found","Field":"Id","Message":"not found"}"#,
/// ).unwrap();
/// let err = err.with_status_code(404);
///
/// assert_eq!(err.error_key, "pullzone.not_found");
/// assert_eq!(err.to_string(), "[404] pullzone.not_found: not found (Id)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error key (e.g. `"dnszone.not_found"`).
    #[serde(rename = "ErrorKey", default)]
    pub error_key: String,

    /// The request field that caused the error. May be empty.
    #[serde(rename = "Field", default)]
    pub field: String,

    /// Human-readable message.
    #[serde(rename = "Message", default)]
    pub message: String,

    /// HTTP status code of the response that carried this error.
    #[serde(skip)]
    pub status_code: u16,
}

impl ApiError {
    /// Sets the HTTP status code.
    #[must_use]
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {} ({})", self.status_code, self.error_key, self.message, self.field)
    }
}

impl std::error::Error for ApiError {}
