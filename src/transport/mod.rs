//! Transport layer for bunny.net communication.
//!
//! This module provides the seam between the client and the network:
//!
//! - [`HttpTransport`]: the trait every transport implements
//! - [`RestTransport`]: production transport (via reqwest)
//! - [`MockTransport`]: in-memory transport for testing without network
//!
//! Transports move bytes only. Status interpretation and JSON decoding live
//! in [`response`](crate::response).
//!
//! ## Custom Transports
//!
//! ```rust
//! use bunnynet::transport::{HttpRequest, HttpResponse, HttpTransport};
//! use bunnynet::Error;
//!
//! struct Offline;
//!
//! #[async_trait::async_trait]
//! impl HttpTransport for Offline {
//!     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, Error> {
//!         Err(Error::connection("offline"))
//!     }
//! }
//! ```

mod mock;
mod rest;
mod traits;

pub use mock::{MockTransport, SharedMockTransport};
pub use rest::RestTransport;
pub use traits::{HttpRequest, HttpResponse, HttpTransport};
