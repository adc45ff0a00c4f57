//! Error types for the bunny.net client.
//!
//! Every public operation returns either a decoded value or an [`Error`].
//! An error is one of two disjoint kinds:
//!
//! - **Remote**: the API rejected the request. [`Error::api_error()`] returns
//!   the structured [`ApiError`] (key, field, message, status).
//! - **Client**: something failed locally or on the wire (URL parsing, JSON
//!   encoding or decoding, connection, timeout, cancellation, unparseable
//!   error body). [`std::error::Error::source()`] exposes the underlying
//!   cause where there is one.
//!
//! ```rust,ignore
//! match client.dns_zones().get(42).await {
//!     Ok(zone) => println!("{}", zone.domain),
//!     Err(e) if e.error_key() == Some("dnszone.not_found") => println!("gone"),
//!     Err(e) if e.is_client() => eprintln!("client failure: {e}"),
//!     Err(e) => return Err(e),
//! }
//! ```

mod api;
#[allow(clippy::module_inception)]
mod error;
mod kind;

pub use api::ApiError;
pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for bunny.net operations.
pub type Result<T> = std::result::Result<T, Error>;
