//! # bunnynet
//!
//! Typed Rust client for the bunny.net CDN and DNS management API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bunnynet::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> bunnynet::Result<()> {
//!     let client = Client::builder()
//!         .api_key("your-access-key")
//!         .build()?;
//!
//!     // One page at a time
//!     let mut pages = client.dns_zones().pages(50, None);
//!     while pages.next().await {
//!         for zone in pages.items() {
//!             println!("{}", zone.domain);
//!         }
//!     }
//!     if let Some(err) = pages.error() {
//!         eprintln!("listing stopped: {err}");
//!     }
//!
//!     // Or everything at once
//!     let keys = client.api_keys().list_all(0).await?;
//!     println!("{} API keys", keys.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Services**: `Client` hands out one service per resource
//!   (`countries`, `api_keys`, `dns_zones`, `pull_zones`, `purge`)
//! - **Pagination**: every paginated resource offers `list` (one page),
//!   `pages` (a lazy [`PageIterator`]) and `list_all` (everything or an error,
//!   never a truncated list)
//! - **Errors**: [`Error::is_api`] separates rejections reported by the API
//!   from failures inside the client; [`Error::error_key`] identifies the
//!   rejection
//! - **No retries**: failed calls are returned to the caller as they are
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod auth;
pub mod cancellation;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;

// Request pipeline
pub mod request;
pub mod response;
pub mod transport;

// API resources
pub mod resources;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use auth::AccessKey;
pub use cancellation::CancellationToken;
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, Error, ErrorKind, Result};
pub use pagination::{IteratorState, PageInfo, PageIterator, PaginatedResponse, Pagination};
pub use request::QueryEncodable;

// Re-export resource services and their most used types
pub use resources::{
    ApiKey, ApiKeysClient, CountriesClient, Country, DnsZonesClient, PullZonesClient, PurgeClient,
    PurgeOptions,
};
pub use resources::dns_zones::{DnsRecord, DnsZone};
pub use resources::pull_zones::PullZone;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let _ = ErrorKind::Api;
    }
}
