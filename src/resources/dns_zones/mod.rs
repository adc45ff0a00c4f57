//! DNS zones and their records.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bunnynet::resources::dns_zones::{AddDnsRecordOptions, AddDnsZoneOptions, DnsRecordType};
//!
//! # async fn example(client: bunnynet::Client) -> bunnynet::Result<()> {
//! let zones = client.dns_zones();
//!
//! let zone = zones.add(&AddDnsZoneOptions::new("example.com")).await?;
//! zones
//!     .add_record(zone.id, &AddDnsRecordOptions::new(DnsRecordType::A, "www", "192.0.2.1"))
//!     .await?;
//!
//! let zone_file = zones.export(zone.id).await?;
//! # Ok(())
//! # }
//! ```

mod types;

use bytes::Bytes;
use reqwest::Method;

pub use types::{
    AddDnsRecordOptions, AddDnsZoneOptions, CheckZoneAvailabilityOptions, DnsRecord, DnsRecordType,
    DnsSecInfo, DnsZone, DnsZoneListOptions, EnvironmentalVariable, GeoLocationInfo,
    IpGeoLocationInfo, LogAnonymizationType, MonitorStatus, MonitorType, SmartRoutingType,
    UpdateDnsRecordOptions, UpdateDnsZoneOptions, ZoneAvailabilityResult,
};

use crate::client::{Client, NO_BODY};
use crate::pagination::{PageIterator, PaginatedResponse, Pagination};
use crate::Result;

/// Client for DNS zone operations.
///
/// Access via `client.dns_zones()`.
#[derive(Clone)]
pub struct DnsZonesClient {
    client: Client,
}

impl DnsZonesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches one page of zones.
    pub async fn list(
        &self,
        pagination: Pagination,
        options: Option<&DnsZoneListOptions>,
    ) -> Result<PaginatedResponse<DnsZone>> {
        self.client.get_page("/dnszone", pagination, &options).await
    }

    /// Returns an iterator over all pages. A `per_page` of 0 uses the default.
    pub fn pages(
        &self,
        per_page: u32,
        options: Option<DnsZoneListOptions>,
    ) -> PageIterator<DnsZone> {
        self.client.paginate("/dnszone", options, per_page)
    }

    /// Fetches every zone page by page.
    pub async fn list_all(
        &self,
        per_page: u32,
        options: Option<DnsZoneListOptions>,
    ) -> Result<Vec<DnsZone>> {
        self.pages(per_page, options).all_items().await
    }

    /// Returns the zone with the given id, including its records.
    pub async fn get(&self, id: i64) -> Result<DnsZone> {
        self.client.call(Method::GET, &zone_path(id), &(), NO_BODY).await
    }

    /// Creates a zone.
    pub async fn add(&self, options: &AddDnsZoneOptions) -> Result<DnsZone> {
        self.client.call(Method::POST, "/dnszone", &(), Some(options)).await
    }

    /// Changes zone settings.
    pub async fn update(&self, id: i64, options: &UpdateDnsZoneOptions) -> Result<DnsZone> {
        self.client.call(Method::POST, &zone_path(id), &(), Some(options)).await
    }

    /// Deletes a zone and all of its records.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.call_empty(Method::DELETE, &zone_path(id), &(), NO_BODY).await
    }

    /// Enables DNSSEC and returns the DS record data to publish.
    pub async fn enable_dnssec(&self, id: i64) -> Result<DnsSecInfo> {
        let path = format!("{}/dnssec", zone_path(id));
        self.client.call(Method::POST, &path, &(), NO_BODY).await
    }

    /// Disables DNSSEC.
    pub async fn disable_dnssec(&self, id: i64) -> Result<DnsSecInfo> {
        let path = format!("{}/dnssec", zone_path(id));
        self.client.call(Method::DELETE, &path, &(), NO_BODY).await
    }

    /// Exports the zone in zone-file format.
    pub async fn export(&self, id: i64) -> Result<Bytes> {
        let path = format!("{}/export", zone_path(id));
        self.client.call_bytes(Method::GET, &path, &()).await
    }

    /// Checks whether a zone name can be added.
    pub async fn check_availability(
        &self,
        options: &CheckZoneAvailabilityOptions,
    ) -> Result<ZoneAvailabilityResult> {
        self.client.call(Method::POST, "/dnszone/checkavailability", &(), Some(options)).await
    }

    /// Adds a record to a zone.
    pub async fn add_record(
        &self,
        zone_id: i64,
        options: &AddDnsRecordOptions,
    ) -> Result<DnsRecord> {
        let path = format!("{}/records", zone_path(zone_id));
        self.client.call(Method::PUT, &path, &(), Some(options)).await
    }

    /// Updates a record.
    pub async fn update_record(
        &self,
        zone_id: i64,
        record_id: i64,
        options: &UpdateDnsRecordOptions,
    ) -> Result<()> {
        let path = record_path(zone_id, record_id);
        self.client.call_empty(Method::POST, &path, &(), Some(options)).await
    }

    /// Deletes a record.
    pub async fn delete_record(&self, zone_id: i64, record_id: i64) -> Result<()> {
        let path = record_path(zone_id, record_id);
        self.client.call_empty(Method::DELETE, &path, &(), NO_BODY).await
    }
}

fn zone_path(id: i64) -> String {
    format!("/dnszone/{id}")
}

fn record_path(zone_id: i64, record_id: i64) -> String {
    format!("/dnszone/{zone_id}/records/{record_id}")
}

impl std::fmt::Debug for DnsZonesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsZonesClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(zone_path(5), "/dnszone/5");
        assert_eq!(record_path(5, 9), "/dnszone/5/records/9");
    }
}
