//! Pull zones: CDN configurations that pull content from an origin.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bunnynet::resources::pull_zones::{AddPullZoneOptions, PurgeCacheOptions};
//!
//! # async fn example(client: bunnynet::Client) -> bunnynet::Result<()> {
//! let zones = client.pull_zones();
//!
//! let options = AddPullZoneOptions::new("assets", "https://origin.example.com");
//! let mut zone = zones.add(&options).await?;
//! zones.add_hostname(zone.id, "cdn.example.com").await?;
//!
//! zone.enable_smart_cache = true;
//! zones.update(zone.id, &zone).await?;
//!
//! zones.purge_cache(zone.id, Some(&PurgeCacheOptions::tag("css"))).await?;
//! # Ok(())
//! # }
//! ```

mod types;

use reqwest::Method;

pub use types::{
    AddCertificateOptions, AddOrUpdateEdgeRuleOptions, AddPullZoneOptions, Chart,
    CheckAvailabilityOptions, CheckAvailabilityResponse, EdgeRule, EdgeRuleTrigger, Hostname,
    OptimizerStatistics, OriginShieldQueueStatistics, PullZone, PullZoneListOptions, PullZoneType,
    PurgeCacheOptions, StatisticsOptions,
};
use types::{
    BlockedIpBody, EdgeRuleEnabledBody, ForceSslBody, FreeCertificateQuery, HostnameBody,
    IncludeCertificate,
};

use crate::client::{Client, NO_BODY};
use crate::pagination::{PageIterator, PaginatedResponse, Pagination};
use crate::Result;

/// Client for pull zone operations.
///
/// Access via `client.pull_zones()`.
#[derive(Clone)]
pub struct PullZonesClient {
    client: Client,
}

impl PullZonesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches one page of pull zones.
    pub async fn list(
        &self,
        pagination: Pagination,
        options: Option<&PullZoneListOptions>,
    ) -> Result<PaginatedResponse<PullZone>> {
        self.client.get_page("/pullzone", pagination, &options).await
    }

    /// Returns an iterator over all pages. A `per_page` of 0 uses the default.
    pub fn pages(
        &self,
        per_page: u32,
        options: Option<PullZoneListOptions>,
    ) -> PageIterator<PullZone> {
        self.client.paginate("/pullzone", options, per_page)
    }

    /// Fetches every pull zone page by page.
    pub async fn list_all(
        &self,
        per_page: u32,
        options: Option<PullZoneListOptions>,
    ) -> Result<Vec<PullZone>> {
        self.pages(per_page, options).all_items().await
    }

    /// Returns the pull zone with the given id.
    pub async fn get(&self, id: i64, include_certificate: bool) -> Result<PullZone> {
        self.client
            .call(Method::GET, &zone_path(id), &IncludeCertificate(include_certificate), NO_BODY)
            .await
    }

    /// Creates a pull zone.
    pub async fn add(&self, options: &AddPullZoneOptions) -> Result<PullZone> {
        self.client.call(Method::POST, "/pullzone", &(), Some(options)).await
    }

    /// Replaces the settings of a pull zone.
    ///
    /// Pass a zone obtained from [`get`](Self::get) with the fields to change
    /// edited; settings in [`PullZone::extra`] are sent back unchanged.
    pub async fn update(&self, id: i64, zone: &PullZone) -> Result<PullZone> {
        self.client.call(Method::POST, &zone_path(id), &(), Some(zone)).await
    }

    /// Deletes a pull zone.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.call_empty(Method::DELETE, &zone_path(id), &(), NO_BODY).await
    }

    /// Purges the zone's cache, or only content with the given cache tag.
    pub async fn purge_cache(&self, id: i64, options: Option<&PurgeCacheOptions>) -> Result<()> {
        let path = action_path(id, "purgeCache");
        self.client.call_empty(Method::POST, &path, &(), options).await
    }

    /// Attaches a hostname.
    pub async fn add_hostname(&self, id: i64, hostname: &str) -> Result<()> {
        let path = action_path(id, "addHostname");
        self.client.call_empty(Method::POST, &path, &(), Some(&HostnameBody { hostname })).await
    }

    /// Detaches a hostname.
    pub async fn remove_hostname(&self, id: i64, hostname: &str) -> Result<()> {
        let path = action_path(id, "removeHostname");
        self.client.delete_with_body(&path, &HostnameBody { hostname }).await
    }

    /// Installs a custom certificate on a hostname.
    pub async fn add_certificate(&self, id: i64, options: &AddCertificateOptions) -> Result<()> {
        let path = action_path(id, "addCertificate");
        self.client.call_empty(Method::POST, &path, &(), Some(options)).await
    }

    /// Removes the certificate of a hostname.
    pub async fn remove_certificate(&self, id: i64, hostname: &str) -> Result<()> {
        let path = action_path(id, "removeCertificate");
        self.client.delete_with_body(&path, &HostnameBody { hostname }).await
    }

    /// Turns HTTPS redirection for a hostname on or off.
    pub async fn set_force_ssl(&self, id: i64, hostname: &str, force_ssl: bool) -> Result<()> {
        let path = action_path(id, "setForceSSL");
        let body = ForceSslBody { hostname, force_ssl };
        self.client.call_empty(Method::POST, &path, &(), Some(&body)).await
    }

    /// Generates a new token authentication key.
    pub async fn reset_security_key(&self, id: i64) -> Result<()> {
        let path = action_path(id, "resetSecurityKey");
        self.client.call_empty(Method::POST, &path, &(), NO_BODY).await
    }

    /// Allows a referrer.
    pub async fn add_allowed_referrer(&self, id: i64, hostname: &str) -> Result<()> {
        self.hostname_action(id, "addAllowedReferrer", hostname).await
    }

    /// Removes an allowed referrer.
    pub async fn remove_allowed_referrer(&self, id: i64, hostname: &str) -> Result<()> {
        self.hostname_action(id, "removeAllowedReferrer", hostname).await
    }

    /// Blocks a referrer.
    pub async fn add_blocked_referrer(&self, id: i64, hostname: &str) -> Result<()> {
        self.hostname_action(id, "addBlockedReferrer", hostname).await
    }

    /// Removes a blocked referrer.
    pub async fn remove_blocked_referrer(&self, id: i64, hostname: &str) -> Result<()> {
        self.hostname_action(id, "removeBlockedReferrer", hostname).await
    }

    /// Blocks a client address.
    pub async fn add_blocked_ip(&self, id: i64, ip: &str) -> Result<()> {
        let path = action_path(id, "addBlockedIp");
        self.client
            .call_empty(Method::POST, &path, &(), Some(&BlockedIpBody { blocked_ip: ip }))
            .await
    }

    /// Unblocks a client address.
    pub async fn remove_blocked_ip(&self, id: i64, ip: &str) -> Result<()> {
        let path = action_path(id, "removeBlockedIp");
        self.client
            .call_empty(Method::POST, &path, &(), Some(&BlockedIpBody { blocked_ip: ip }))
            .await
    }

    /// Creates an edge rule, or replaces the one named by `options.guid`.
    pub async fn add_or_update_edge_rule(
        &self,
        id: i64,
        options: &AddOrUpdateEdgeRuleOptions,
    ) -> Result<()> {
        let path = action_path(id, "edgerules/addOrUpdate");
        self.client.call_empty(Method::POST, &path, &(), Some(options)).await
    }

    /// Deletes an edge rule.
    pub async fn delete_edge_rule(&self, id: i64, edge_rule_id: &str) -> Result<()> {
        let path = edge_rule_path(id, edge_rule_id);
        self.client.call_empty(Method::DELETE, &path, &(), NO_BODY).await
    }

    /// Turns an edge rule on or off.
    pub async fn set_edge_rule_enabled(
        &self,
        id: i64,
        edge_rule_id: &str,
        enabled: bool,
    ) -> Result<()> {
        let path = format!("{}/setEdgeRuleEnabled", edge_rule_path(id, edge_rule_id));
        let body = EdgeRuleEnabledBody { id, value: enabled };
        self.client.call_empty(Method::POST, &path, &(), Some(&body)).await
    }

    /// Returns origin shield queue statistics.
    pub async fn origin_shield_queue_statistics(
        &self,
        id: i64,
        options: Option<&StatisticsOptions>,
    ) -> Result<OriginShieldQueueStatistics> {
        let path = action_path(id, "originshield/queuestatistics");
        self.client.call(Method::GET, &path, &options, NO_BODY).await
    }

    /// Returns image optimizer statistics.
    pub async fn optimizer_statistics(
        &self,
        id: i64,
        options: Option<&StatisticsOptions>,
    ) -> Result<OptimizerStatistics> {
        let path = action_path(id, "optimizer/statistics");
        self.client.call(Method::GET, &path, &options, NO_BODY).await
    }

    /// Requests a free certificate for a hostname.
    pub async fn load_free_certificate(&self, hostname: &str) -> Result<()> {
        self.client
            .call_empty(
                Method::GET,
                "/pullzone/loadFreeCertificate",
                &FreeCertificateQuery(hostname),
                NO_BODY,
            )
            .await
    }

    /// Checks whether a pull zone name is free.
    pub async fn check_availability(
        &self,
        options: &CheckAvailabilityOptions,
    ) -> Result<CheckAvailabilityResponse> {
        self.client.call(Method::POST, "/pullzone/checkavailability", &(), Some(options)).await
    }

    async fn hostname_action(&self, id: i64, action: &str, hostname: &str) -> Result<()> {
        let path = action_path(id, action);
        self.client.call_empty(Method::POST, &path, &(), Some(&HostnameBody { hostname })).await
    }
}

fn zone_path(id: i64) -> String {
    format!("/pullzone/{id}")
}

fn action_path(id: i64, action: &str) -> String {
    format!("/pullzone/{id}/{action}")
}

fn edge_rule_path(id: i64, edge_rule_id: &str) -> String {
    format!("/pullzone/{id}/edgerules/{}", urlencoding::encode(edge_rule_id))
}

impl std::fmt::Debug for PullZonesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullZonesClient").finish_non_exhaustive()
    }
}
