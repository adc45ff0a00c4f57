//! DNS zone and record models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::QueryEncodable;
use crate::resources::api_date;

int_enum! {
    /// Type of a DNS record.
    => DnsRecordType, i32;
    /// IPv4 address.
    (A => 0, "A")
    /// IPv6 address.
    (AAAA => 1, "AAAA")
    /// Canonical name.
    (CNAME => 2, "CNAME")
    /// Text.
    (TXT => 3, "TXT")
    /// Mail exchanger.
    (MX => 4, "MX")
    /// HTTP redirect served by the edge.
    (REDIRECT => 5, "Redirect")
    /// CNAME flattening.
    (FLATTEN => 6, "Flatten")
    /// Link to a pull zone.
    (PULL_ZONE => 7, "PullZone")
    /// Service locator.
    (SRV => 8, "SRV")
    /// Certification authority authorization.
    (CAA => 9, "CAA")
    /// Pointer.
    (PTR => 10, "PTR")
    /// Edge script.
    (SCRIPT => 11, "Script")
    /// Name server.
    (NS => 12, "NS")
}

int_enum! {
    /// Health of a monitored record.
    => MonitorStatus, i32;
    /// Not yet known.
    (UNKNOWN => 0, "Unknown")
    /// Target is reachable.
    (ONLINE => 1, "Online")
    /// Target is unreachable.
    (OFFLINE => 2, "Offline")
}

int_enum! {
    /// How a record's target is monitored.
    => MonitorType, i32;
    /// No monitoring.
    (NONE => 0, "None")
    /// ICMP ping.
    (PING => 1, "Ping")
    /// HTTP request.
    (HTTP => 2, "Http")
    /// Other monitor.
    (MONITOR => 3, "Monitor")
}

int_enum! {
    /// Smart routing applied to a record.
    => SmartRoutingType, i32;
    /// No smart routing.
    (NONE => 0, "None")
    /// Route by latency.
    (LATENCY => 1, "Latency")
    /// Route by geolocation.
    (GEOLOCATION => 2, "Geolocation")
}

int_enum! {
    /// How client addresses are anonymized in query logs.
    => LogAnonymizationType, i32;
    /// Drop the last digit.
    (ONE_DIGIT => 0, "OneDigit")
    /// Drop the whole address.
    (DROP => 1, "Drop")
}

/// Geographic location of a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeoLocationInfo {
    /// Country name.
    pub country: String,
    /// City name.
    pub city: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

/// Network location of a record's address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IpGeoLocationInfo {
    /// ISO country code.
    pub country_code: String,
    /// Country name.
    pub country: String,
    /// Autonomous system number.
    #[serde(rename = "ASN")]
    pub asn: i64,
    /// Organization owning the address.
    pub organization_name: String,
    /// City name.
    pub city: String,
}

/// Name/value pair passed to script records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvironmentalVariable {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

impl EnvironmentalVariable {
    /// Creates a variable.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// A record in a DNS zone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DnsRecord {
    /// Unique identifier.
    pub id: i64,
    /// Record type.
    #[serde(rename = "Type")]
    pub record_type: DnsRecordType,
    /// Time to live in seconds.
    pub ttl: i32,
    /// Record value.
    pub value: String,
    /// Name relative to the zone.
    pub name: String,
    /// Weight.
    pub weight: i32,
    /// Priority.
    pub priority: i32,
    /// SRV port.
    pub port: i32,
    /// CAA flags.
    pub flags: i32,
    /// CAA tag.
    pub tag: String,
    /// Whether the record is served through the CDN.
    pub accelerated: bool,
    /// Pull zone serving an accelerated record.
    pub accelerated_pull_zone_id: i64,
    /// Name of the linked pull zone or script.
    pub link_name: String,
    /// Network location of the value.
    #[serde(rename = "IPGeoLocationInfo")]
    pub ip_geo_location_info: IpGeoLocationInfo,
    /// Geographic location of the value.
    pub geolocation_info: GeoLocationInfo,
    /// Monitor health.
    pub monitor_status: MonitorStatus,
    /// Monitoring mode.
    pub monitor_type: MonitorType,
    /// Latitude for geolocation routing.
    pub geolocation_latitude: f64,
    /// Longitude for geolocation routing.
    pub geolocation_longitude: f64,
    /// Wire name carries the API's historical misspelling.
    #[serde(rename = "EnviromentalVariables")]
    pub environmental_variables: Vec<EnvironmentalVariable>,
    /// Latency zone for latency routing.
    pub latency_zone: String,
    /// Smart routing mode.
    pub smart_routing_type: SmartRoutingType,
    /// Whether the record is disabled.
    pub disabled: bool,
    /// Free-form comment.
    pub comment: String,
}

/// Fields of a record to create.
///
/// Unset fields are omitted from the request and take the API's default.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddDnsRecordOptions {
    /// Record type.
    #[serde(rename = "Type")]
    pub record_type: DnsRecordType,
    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    /// Record value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Record name relative to the zone; empty for the apex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    /// Priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// CAA flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i32>,
    /// CAA tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// SRV port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Linked pull zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_zone_id: Option<i64>,
    /// Linked edge script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_id: Option<i64>,
    /// Serve through the CDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerated: Option<bool>,
    /// Monitoring mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<MonitorType>,
    /// Latitude for geolocation routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation_latitude: Option<f64>,
    /// Longitude for geolocation routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation_longitude: Option<f64>,
    /// Latency zone for latency routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_zone: Option<String>,
    /// Smart routing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_routing_type: Option<SmartRoutingType>,
    /// Create the record disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Script environment.
    #[serde(rename = "EnviromentalVariables", skip_serializing_if = "Option::is_none")]
    pub environmental_variables: Option<Vec<EnvironmentalVariable>>,
    /// Free-form comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AddDnsRecordOptions {
    /// Creates options for a record of the given type, name and value.
    pub fn new(
        record_type: DnsRecordType,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self { record_type, name: Some(name.into()), value: Some(value.into()), ..Self::default() }
    }

    /// Sets the time to live.
    #[must_use]
    pub fn with_ttl(mut self, ttl: i32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Fields of a record to change.
///
/// The record id and type are always sent; unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsRecordOptions {
    /// Record being updated.
    pub id: i64,
    /// Record type.
    #[serde(rename = "Type")]
    pub record_type: DnsRecordType,
    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    /// Record value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Record name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    /// Priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// CAA flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i32>,
    /// CAA tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// SRV port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Linked pull zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_zone_id: Option<i64>,
    /// Linked edge script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_id: Option<i64>,
    /// Serve through the CDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerated: Option<bool>,
    /// Monitoring mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<MonitorType>,
    /// Latitude for geolocation routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation_latitude: Option<f64>,
    /// Longitude for geolocation routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation_longitude: Option<f64>,
    /// Latency zone for latency routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_zone: Option<String>,
    /// Smart routing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_routing_type: Option<SmartRoutingType>,
    /// Disable or enable the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Script environment.
    #[serde(rename = "EnviromentalVariables", skip_serializing_if = "Option::is_none")]
    pub environmental_variables: Option<Vec<EnvironmentalVariable>>,
    /// Free-form comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl UpdateDnsRecordOptions {
    /// Creates an update for the given record that changes nothing yet.
    pub fn new(id: i64, record_type: DnsRecordType) -> Self {
        Self { id, record_type, ..Self::default() }
    }

    /// Sets the value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the time to live.
    #[must_use]
    pub fn with_ttl(mut self, ttl: i32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Disables or enables the record.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

/// A DNS zone with its records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DnsZone {
    /// Unique identifier.
    pub id: i64,
    /// Zone apex.
    pub domain: String,
    /// Records of the zone.
    pub records: Vec<DnsRecord>,
    /// Last modification.
    #[serde(with = "api_date")]
    pub date_modified: Option<DateTime<Utc>>,
    /// Creation.
    #[serde(with = "api_date")]
    pub date_created: Option<DateTime<Utc>>,
    /// Whether the bunny.net nameservers are delegated to.
    pub nameservers_detected: bool,
    /// Whether custom nameservers are used.
    pub custom_nameservers_enabled: bool,
    /// First custom nameserver.
    pub nameserver1: String,
    /// Second custom nameserver.
    pub nameserver2: String,
    /// SOA contact.
    pub soa_email: String,
    /// Next delegation check.
    #[serde(with = "api_date")]
    pub nameservers_next_check: Option<DateTime<Utc>>,
    /// Whether DNSSEC is enabled.
    pub dns_sec_enabled: bool,
    /// Whether query logging is enabled.
    pub logging_enabled: bool,
    /// Whether logged addresses are anonymized.
    #[serde(rename = "LoggingIPAnonymizationEnabled")]
    pub logging_ip_anonymization_enabled: bool,
    /// Anonymization mode.
    pub log_anonymization_type: LogAnonymizationType,
}

/// Zone to create.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddDnsZoneOptions {
    /// Zone apex.
    pub domain: String,
}

impl AddDnsZoneOptions {
    /// Creates options for the given domain.
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: domain.into() }
    }
}

/// Zone settings to change. Unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsZoneOptions {
    /// Use custom nameservers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_nameservers_enabled: Option<bool>,
    /// First custom nameserver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameserver1: Option<String>,
    /// Second custom nameserver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameserver2: Option<String>,
    /// SOA contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_email: Option<String>,
    /// Enable query logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_enabled: Option<bool>,
    /// Anonymization mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_anonymization_type: Option<LogAnonymizationType>,
    /// Anonymize logged addresses.
    #[serde(rename = "LoggingIPAnonymizationEnabled", skip_serializing_if = "Option::is_none")]
    pub logging_ip_anonymization_enabled: Option<bool>,
}

impl UpdateDnsZoneOptions {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets custom nameservers and enables them.
    #[must_use]
    pub fn with_custom_nameservers(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.custom_nameservers_enabled = Some(true);
        self.nameserver1 = Some(first.into());
        self.nameserver2 = Some(second.into());
        self
    }

    /// Sets the SOA contact.
    #[must_use]
    pub fn with_soa_email(mut self, email: impl Into<String>) -> Self {
        self.soa_email = Some(email.into());
        self
    }

    /// Enables or disables query logging.
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = Some(enabled);
        self
    }
}

/// DNSSEC state and DS record data of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DnsSecInfo {
    /// Whether DNSSEC is enabled.
    pub enabled: bool,
    /// DS record to publish at the parent.
    pub ds_record: String,
    /// Digest.
    pub digest: String,
    /// Digest type.
    pub digest_type: String,
    /// Signing algorithm number.
    pub algorithm: i32,
    /// Public key.
    pub public_key: String,
    /// Key tag.
    pub key_tag: i32,
    /// DNSKEY flags.
    pub flags: i32,
}

/// Zone name to check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckZoneAvailabilityOptions {
    /// Zone name.
    pub name: String,
}

impl CheckZoneAvailabilityOptions {
    /// Creates options for the given zone name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result of a zone availability check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ZoneAvailabilityResult {
    /// Whether the zone can be added.
    pub available: bool,
    /// Explanation from the API.
    pub message: String,
}

/// Filters for listing zones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsZoneListOptions {
    /// Only zones whose domain contains this text.
    pub search: Option<String>,
}

impl DnsZoneListOptions {
    /// Creates options that search for `text`.
    pub fn search(text: impl Into<String>) -> Self {
        Self { search: Some(text.into()) }
    }
}

impl QueryEncodable for DnsZoneListOptions {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.insert("search".to_owned(), search.to_owned());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_record_type_values() {
        assert_eq!(DnsRecordType::A.to_int(), 0);
        assert_eq!(DnsRecordType::NS.to_int(), 12);
        assert_eq!(DnsRecordType::PULL_ZONE.to_string(), "PullZone");
        assert_eq!(DnsRecordType::from_int(42).to_string(), "DnsRecordType(42)");
    }

    #[test]
    fn test_zone_wire_format() {
        let zone: DnsZone = serde_json::from_value(serde_json::json!({
            "Id": 12345,
            "Domain": "example.com",
            "Records": [{
                "Id": 1,
                "Type": 0,
                "Ttl": 300,
                "Value": "192.0.2.1",
                "Name": "www",
                "EnviromentalVariables": [{"Name": "A", "Value": "B"}],
                "IPGeoLocationInfo": {"ASN": 64500, "CountryCode": "DE"},
                "MonitorStatus": 1
            }],
            "DateCreated": "2023-01-01T00:00:00Z",
            "DateModified": "2023-01-02T00:00:00",
            "NameserversNextCheck": null,
            "DnsSecEnabled": true,
            "LoggingIPAnonymizationEnabled": true,
            "LogAnonymizationType": 1
        }))
        .unwrap();

        assert_eq!(zone.domain, "example.com");
        assert_eq!(zone.date_created, Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(zone.date_modified, Some(Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap()));
        assert!(zone.nameservers_next_check.is_none());
        assert!(zone.logging_ip_anonymization_enabled);
        assert_eq!(zone.log_anonymization_type, LogAnonymizationType::DROP);

        let record = &zone.records[0];
        assert_eq!(record.record_type, DnsRecordType::A);
        assert_eq!(record.monitor_status, MonitorStatus::ONLINE);
        assert_eq!(record.ip_geo_location_info.asn, 64500);
        assert_eq!(record.environmental_variables, vec![EnvironmentalVariable::new("A", "B")]);
    }

    #[test]
    fn test_add_record_omits_unset_fields() {
        let options = AddDnsRecordOptions::new(DnsRecordType::A, "www", "192.0.2.1").with_ttl(300);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Type": 0, "Name": "www", "Value": "192.0.2.1", "Ttl": 300})
        );
    }

    #[test]
    fn test_update_record_sends_explicit_false() {
        let options = UpdateDnsRecordOptions::new(9, DnsRecordType::TXT).with_disabled(false);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({"Id": 9, "Type": 3, "Disabled": false}));
    }

    #[test]
    fn test_update_zone_options() {
        let options = UpdateDnsZoneOptions::new()
            .with_custom_nameservers("ns1.example.com", "ns2.example.com")
            .with_logging(true);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["CustomNameserversEnabled"], true);
        assert_eq!(json["Nameserver2"], "ns2.example.com");
        assert_eq!(json["LoggingEnabled"], true);
        assert!(json.get("SoaEmail").is_none());
    }

    #[test]
    fn test_list_options_query() {
        assert!(DnsZoneListOptions::default().to_query_params().is_empty());
        assert!(DnsZoneListOptions::search("").to_query_params().is_empty());
        assert_eq!(DnsZoneListOptions::search("exa").to_query_params()["search"], "exa");
    }
}
