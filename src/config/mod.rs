//! Configuration for the bunny.net client.
//!
//! This module provides:
//! - Named defaults for the API endpoint, user agent, timeouts and pagination
//! - [`ClientConfig`]: Endpoint, user agent and timeout of a client

mod client;

use std::time::Duration;

pub use client::ClientConfig;

/// Default base URL of the bunny.net API.
pub const DEFAULT_BASE_URL: &str = "https://api.bunny.net";

/// Default `User-Agent` header value, a single product token for this crate.
pub const DEFAULT_USER_AGENT: &str = concat!("bunnynet-rust/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default page number for paginated requests (pages are 1-based).
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Maximum number of items per page accepted by the API.
pub const MAX_PER_PAGE: u32 = 1000;

/// Environment variable holding the access key for [`Client::from_env`](crate::Client::from_env).
pub const API_KEY_ENV: &str = "BUNNYNET_API_KEY";

/// Environment variable overriding the base URL for [`Client::from_env`](crate::Client::from_env).
pub const BASE_URL_ENV: &str = "BUNNYNET_BASE_URL";
