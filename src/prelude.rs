//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use bunnynet::prelude::*;
//! ```
//!
//! This provides access to:
//! - Core client types
//! - Error types
//! - Pagination types
//! - Resource services and their records

pub use crate::{
    auth::AccessKey,
    cancellation::CancellationToken,
    client::{Client, ClientBuilder},
    config::ClientConfig,
    error::{ApiError, Error, ErrorKind, Result},
    pagination::{IteratorState, PageInfo, PageIterator, PaginatedResponse, Pagination},
    request::QueryEncodable,
    resources::{
        ApiKey, ApiKeysClient, CountriesClient, Country, DnsZonesClient, PullZonesClient,
        PurgeClient, PurgeOptions,
        dns_zones::{DnsRecord, DnsRecordType, DnsZone, DnsZoneListOptions},
        pull_zones::{PullZone, PullZoneListOptions},
    },
};
