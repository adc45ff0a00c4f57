//! Resource services of the bunny.net API.
//!
//! Each service is a cheap `Clone` handle over a [`Client`](crate::Client)
//! and turns method calls into requests through the shared pipeline.
//! Paginated resources offer three calling conventions:
//!
//! | Method        | Returns                                  |
//! |---------------|------------------------------------------|
//! | `list(p, ..)` | one [`PaginatedResponse`](crate::PaginatedResponse) |
//! | `pages(n, ..)`| a lazy [`PageIterator`](crate::PageIterator) |
//! | `list_all(n, ..)` | every item, or the first error       |

/// Creates an open numeric API enumeration.
///
/// The API sends these as bare integers and may add values at any time, so
/// they are newtypes with named constants rather than closed enums. Unknown
/// values round-trip unchanged.
macro_rules! int_enum {
    ( $(#[$attr:meta])* => $name:ident, $inttype:ty;
      $( $(#[$variant_attr:meta])* ( $variant:ident => $value:expr, $mnemonic:expr ) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name($inttype);

        impl $name {
            $(
                $(#[$variant_attr])*
                pub const $variant: $name = $name($value);
            )*

            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                Self(value)
            }

            /// Returns the raw integer value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self.0
            }

            /// Returns the mnemonic for this value if there is one.
            pub const fn to_mnemonic(self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => Some($mnemonic), )*
                    _ => None,
                }
            }
        }

        impl From<$inttype> for $name {
            fn from(value: $inttype) -> Self {
                Self::from_int(value)
            }
        }

        impl From<$name> for $inttype {
            fn from(value: $name) -> Self {
                value.to_int()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.to_mnemonic() {
                    Some(m) => f.write_str(m),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }
    };
}

mod api_keys;
mod countries;
pub mod dns_zones;
pub mod pull_zones;
mod purge;

pub use api_keys::{ApiKey, ApiKeysClient};
pub use countries::{CountriesClient, Country};
pub use dns_zones::DnsZonesClient;
pub use pull_zones::PullZonesClient;
pub use purge::{PurgeClient, PurgeOptions};

/// Serde codec for API timestamps.
///
/// The API writes UTC timestamps with or without a trailing offset
/// (`2023-01-01T00:00:00Z` and `2023-01-01T00:00:00` both occur). `null`
/// and an empty string decode as `None`. Encoding always writes RFC 3339.
pub(crate) mod api_date {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn parse(value: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }

    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    int_enum! {
        /// Test enumeration.
        => Color, i32;
        (RED => 0, "Red")
        (GREEN => 1, "Green")
    }

    #[test]
    fn test_int_enum_constants() {
        assert_eq!(Color::RED.to_int(), 0);
        assert_eq!(Color::from_int(1), Color::GREEN);
        assert_eq!(Color::default(), Color::RED);
        assert_eq!(Color::GREEN.to_string(), "Green");
    }

    #[test]
    fn test_int_enum_unknown_value_round_trips() {
        let color: Color = serde_json::from_str("7").unwrap();
        assert_eq!(color.to_mnemonic(), None);
        assert_eq!(color.to_string(), "Color(7)");
        assert_eq!(serde_json::to_string(&color).unwrap(), "7");
        assert_eq!(i32::from(color), 7);
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Stamped {
        #[serde(with = "api_date", default)]
        at: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[test_case::test_case(r#"{"at":"2023-01-01T00:00:00Z"}"# ; "rfc3339")]
    #[test_case::test_case(r#"{"at":"2023-01-01T00:00:00"}"# ; "no offset")]
    #[test_case::test_case(r#"{"at":"2023-01-01T02:00:00+02:00"}"# ; "with offset")]
    fn test_api_date_parses(json: &str) {
        let stamped: Stamped = serde_json::from_str(json).unwrap();
        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            r#"{"at":"2023-01-01T00:00:00Z"}"#
        );
    }

    #[test]
    fn test_api_date_empty() {
        for json in [r#"{"at":null}"#, r#"{"at":""}"#, "{}"] {
            let stamped: Stamped = serde_json::from_str(json).unwrap();
            assert!(stamped.at.is_none());
        }
    }

    #[test]
    fn test_api_date_rejects_garbage() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }
}
