//! Serde helpers for the API's ISO 8601 timestamps.
//!
//! The server does not always attach an offset: naive timestamps such as
//! `2024-03-01T12:00:00.123456` are read as UTC. Output is always RFC 3339
//! with a `Z` suffix.
//!
//! ```ignore
//! #[serde(with = "crate::timestamp::iso_utc")]
//! #[schemars(with = "String")]
//! pub last_updated: DateTime<Utc>,
//! ```

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an RFC 3339 timestamp, or a naive ISO timestamp taken as UTC.
#[must_use]
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// `DateTime<Utc>` as an ISO 8601 string, offset optional on input.
#[allow(clippy::wildcard_imports)]
pub mod iso_utc {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_utc(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}
