//! Pull zone models and request options.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::request::QueryEncodable;

int_enum! {
    /// Pricing tier of a pull zone.
    => PullZoneType, i32;
    /// Premium network.
    (PREMIUM => 0, "Premium")
    /// Volume network.
    (VOLUME => 1, "Volume")
}

/// A hostname attached to a pull zone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Hostname {
    /// Unique identifier.
    pub id: i64,
    /// The hostname.
    pub value: String,
    /// Whether HTTP requests are redirected to HTTPS.
    #[serde(rename = "ForceSSL")]
    pub force_ssl: bool,
    /// Whether this is the `*.b-cdn.net` hostname.
    pub is_system_hostname: bool,
    /// Whether a certificate is installed.
    pub has_certificate: bool,
    /// Certificate, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// Certificate key, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_key: Option<String>,
}

/// Condition under which an edge rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeRuleTrigger {
    /// Trigger type.
    #[serde(rename = "Type")]
    pub trigger_type: i32,
    /// Patterns to match.
    pub pattern_matches: Vec<String>,
    /// How the patterns combine.
    pub pattern_matching_type: i32,
    /// Trigger parameter, such as a header name.
    pub parameter1: String,
    /// How this trigger combines with the others.
    pub trigger_matching_type: i32,
}

/// An edge rule of a pull zone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeRule {
    /// Rule identifier.
    pub guid: String,
    /// Action to perform.
    pub action_type: i32,
    /// First action parameter.
    pub action_parameter1: String,
    /// Second action parameter.
    pub action_parameter2: String,
    /// Conditions of the rule.
    pub triggers: Vec<EdgeRuleTrigger>,
    /// Description.
    pub description: String,
    /// Whether the rule is active.
    pub enabled: bool,
}

/// A pull zone.
///
/// Commonly used settings are typed fields. Every other setting the API
/// returns is kept in [`extra`](Self::extra), so a zone fetched with `get`
/// and passed to `update` keeps settings this type does not model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PullZone {
    /// Unique identifier.
    pub id: i64,
    /// Zone name; also the `<name>.b-cdn.net` hostname.
    pub name: String,
    /// Origin the zone pulls from.
    pub origin_url: String,
    /// Whether the zone serves traffic.
    pub enabled: bool,
    /// Attached hostnames.
    pub hostnames: Vec<Hostname>,
    /// Storage zone used as origin, if any.
    pub storage_zone_id: i64,
    /// Edge script attached, if any.
    pub edge_script_id: i64,
    /// Referrers allowed to load content.
    pub allowed_referrers: Vec<String>,
    /// Referrers refused.
    pub blocked_referrers: Vec<String>,
    /// Client addresses refused.
    pub blocked_ips: Vec<String>,
    /// Serve from North America.
    #[serde(rename = "EnableGeoZoneUS")]
    pub enable_geo_zone_us: bool,
    /// Serve from Europe.
    #[serde(rename = "EnableGeoZoneEU")]
    pub enable_geo_zone_eu: bool,
    /// Serve from Asia and Oceania.
    #[serde(rename = "EnableGeoZoneASIA")]
    pub enable_geo_zone_asia: bool,
    /// Serve from South America.
    #[serde(rename = "EnableGeoZoneSA")]
    pub enable_geo_zone_sa: bool,
    /// Serve from Africa and the Middle East.
    #[serde(rename = "EnableGeoZoneAF")]
    pub enable_geo_zone_af: bool,
    /// Whether token authentication is required.
    pub zone_security_enabled: bool,
    /// Token authentication key.
    pub zone_security_key: String,
    /// Cache without regard to the query string.
    pub ignore_query_strings: bool,
    /// Monthly bandwidth cap in bytes; 0 is unlimited.
    pub monthly_bandwidth_limit: i64,
    /// Bandwidth used this month in bytes.
    pub monthly_bandwidth_used: i64,
    /// Charges this month.
    pub monthly_charges: f64,
    /// Forward the request `Host` header to the origin.
    pub add_host_header: bool,
    /// `Host` header sent to the origin.
    pub origin_host_header: String,
    /// Pricing tier.
    #[serde(rename = "Type")]
    pub zone_type: PullZoneType,
    /// Countries refused.
    pub blocked_countries: Vec<String>,
    /// Route origin requests through an origin shield.
    pub enable_origin_shield: bool,
    /// Keep access logs.
    pub enable_logging: bool,
    /// Cache content regardless of origin headers.
    pub enable_smart_cache: bool,
    /// Edge rules.
    pub edge_rules: Vec<EdgeRule>,
    /// Default CNAME target.
    pub cname_domain: String,
    /// Verify the origin's TLS certificate.
    #[serde(rename = "VerifyOriginSSL")]
    pub verify_origin_ssl: bool,
    /// Follow origin redirects.
    pub follow_redirects: bool,
    /// Origin retry count.
    pub origin_retries: i32,
    /// Cache 4xx and 5xx responses.
    pub cache_error_responses: bool,
    /// Issue certificates for new hostnames automatically.
    #[serde(rename = "EnableAutoSSL")]
    pub enable_auto_ssl: bool,
    /// Never issue free certificates.
    pub disable_lets_encrypt: bool,
    /// Settings without a typed field.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Pull zone to create.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddPullZoneOptions {
    /// Zone name.
    pub name: String,
    /// Origin URL.
    pub origin_url: String,
    /// Pricing tier.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<PullZoneType>,
    /// Referrers allowed to load content.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_referrers: Vec<String>,
    /// Referrers refused.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocked_referrers: Vec<String>,
    /// Client addresses refused.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocked_ips: Vec<String>,
    /// Serve from North America.
    #[serde(rename = "EnableGeoZoneUS", skip_serializing_if = "Option::is_none")]
    pub enable_geo_zone_us: Option<bool>,
    /// Serve from Europe.
    #[serde(rename = "EnableGeoZoneEU", skip_serializing_if = "Option::is_none")]
    pub enable_geo_zone_eu: Option<bool>,
    /// Serve from Asia and Oceania.
    #[serde(rename = "EnableGeoZoneASIA", skip_serializing_if = "Option::is_none")]
    pub enable_geo_zone_asia: Option<bool>,
    /// Serve from South America.
    #[serde(rename = "EnableGeoZoneSA", skip_serializing_if = "Option::is_none")]
    pub enable_geo_zone_sa: Option<bool>,
    /// Serve from Africa and the Middle East.
    #[serde(rename = "EnableGeoZoneAF", skip_serializing_if = "Option::is_none")]
    pub enable_geo_zone_af: Option<bool>,
}

impl AddPullZoneOptions {
    /// Creates options for a zone pulling from `origin_url`.
    pub fn new(name: impl Into<String>, origin_url: impl Into<String>) -> Self {
        Self { name: name.into(), origin_url: origin_url.into(), ..Self::default() }
    }

    /// Sets the pricing tier.
    #[must_use]
    pub fn with_type(mut self, zone_type: PullZoneType) -> Self {
        self.zone_type = Some(zone_type);
        self
    }
}

/// Body naming a single hostname.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct HostnameBody<'a> {
    pub hostname: &'a str,
}

/// Body naming a single blocked address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct BlockedIpBody<'a> {
    pub blocked_ip: &'a str,
}

/// Body of `setForceSSL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ForceSslBody<'a> {
    pub hostname: &'a str,
    #[serde(rename = "ForceSSL")]
    pub force_ssl: bool,
}

/// Body of `setEdgeRuleEnabled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct EdgeRuleEnabledBody {
    pub id: i64,
    pub value: bool,
}

/// Custom certificate to install on a hostname.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddCertificateOptions {
    /// Hostname the certificate is for.
    pub hostname: String,
    /// Base64-encoded PEM certificate chain.
    pub certificate: String,
    /// Base64-encoded PEM private key.
    pub certificate_key: String,
}

impl AddCertificateOptions {
    /// Creates options from PEM data, base64-encoding it as the API expects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bunnynet::resources::pull_zones::AddCertificateOptions;
    ///
    /// let options = AddCertificateOptions::from_pem("cdn.example.com", b"cert", b"key");
    /// assert_eq!(options.certificate, "Y2VydA==");
    /// ```
    pub fn from_pem(hostname: impl Into<String>, certificate: &[u8], key: &[u8]) -> Self {
        Self {
            hostname: hostname.into(),
            certificate: STANDARD.encode(certificate),
            certificate_key: STANDARD.encode(key),
        }
    }
}

/// Edge rule to create, or to replace when `guid` names an existing rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddOrUpdateEdgeRuleOptions {
    /// Rule to replace; `None` creates a rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    /// Action to perform.
    pub action_type: i32,
    /// First action parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_parameter1: Option<String>,
    /// Second action parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_parameter2: Option<String>,
    /// Conditions of the rule.
    pub triggers: Vec<EdgeRuleTrigger>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the rule is active.
    pub enabled: bool,
}

/// Options for purging a pull zone's cache.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurgeCacheOptions {
    /// Purge only content carrying this cache tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_tag: Option<String>,
}

impl PurgeCacheOptions {
    /// Creates options that purge content tagged `tag`.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self { cache_tag: Some(tag.into()) }
    }
}

/// Pull zone name to check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckAvailabilityOptions {
    /// Zone name.
    pub name: String,
}

impl CheckAvailabilityOptions {
    /// Creates options for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result of a pull zone name check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckAvailabilityResponse {
    /// Whether the name is free.
    pub available: bool,
}

/// Chart data keyed by timestamp.
pub type Chart = serde_json::Map<String, serde_json::Value>;

/// Origin shield queue statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OriginShieldQueueStatistics {
    /// Concurrent origin requests over time.
    pub concurrent_requests_chart: Chart,
    /// Queued origin requests over time.
    pub queued_requests_chart: Chart,
}

/// Image optimizer statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OptimizerStatistics {
    /// Optimized requests over time.
    pub requests_optimized_chart: Chart,
    /// Compression ratio over time.
    pub average_compression_chart: Chart,
    /// Traffic saved over time.
    pub traffic_saved_chart: Chart,
    /// Processing time over time.
    pub average_processing_time_chart: Chart,
    /// Optimized requests in the period.
    pub total_requests_optimized: f64,
    /// Traffic saved in the period.
    pub total_traffic_saved: f64,
    /// Mean processing time in the period.
    pub average_processing_time: f64,
    /// Mean compression ratio in the period.
    pub average_compression_ratio: f64,
}

/// Period and resolution of a statistics query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatisticsOptions {
    /// Start of the period.
    pub date_from: Option<DateTime<Utc>>,
    /// End of the period.
    pub date_to: Option<DateTime<Utc>>,
    /// Hourly instead of daily data points.
    pub hourly: bool,
}

impl StatisticsOptions {
    /// Creates options for the period `from..to`.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { date_from: Some(from), date_to: Some(to), hourly: false }
    }

    /// Requests hourly data points.
    #[must_use]
    pub fn hourly(mut self) -> Self {
        self.hourly = true;
        self
    }
}

impl QueryEncodable for StatisticsOptions {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(from) = self.date_from {
            params.insert("dateFrom".to_owned(), from.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        if let Some(to) = self.date_to {
            params.insert("dateTo".to_owned(), to.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        if self.hourly {
            params.insert("hourly".to_owned(), "true".to_owned());
        }
        params
    }
}

/// Filters for listing pull zones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PullZoneListOptions {
    /// Only zones whose name contains this text.
    pub search: Option<String>,
    /// Include hostname certificates in the response.
    pub include_certificate: bool,
}

impl QueryEncodable for PullZoneListOptions {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.insert("search".to_owned(), search.to_owned());
        }
        if self.include_certificate {
            params.insert("includeCertificate".to_owned(), "true".to_owned());
        }
        params
    }
}

/// Query of `get`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IncludeCertificate(pub bool);

impl QueryEncodable for IncludeCertificate {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if self.0 {
            params.insert("includeCertificate".to_owned(), "true".to_owned());
        }
        params
    }
}

/// Query of `loadFreeCertificate`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FreeCertificateQuery<'a>(pub &'a str);

impl QueryEncodable for FreeCertificateQuery<'_> {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("hostname".to_owned(), self.0.to_owned())])
    }
}
