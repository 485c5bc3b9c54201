//! Timestamp parsing and display.
//!
//! The server emits Python `isoformat()` strings without an offset, some
//! fields are plain dates, and some may be RFC 3339. Anything else decodes to
//! `None` so one bad field never fails a whole response.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a server timestamp. Returns `None` when no known format matches.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format the date part, day first (`01/01/2024`).
pub fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%d/%m/%Y").to_string()
}

/// Format the time part as 24h `HH:MM`.
pub fn format_time(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Format an optional timestamp's date, with a fallback for missing values.
pub fn format_date_or(timestamp: Option<&NaiveDateTime>, fallback: &str) -> String {
    timestamp
        .map(format_date)
        .unwrap_or_else(|| fallback.to_string())
}

/// Deserialize a nullable, possibly malformed timestamp string.
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => parse_timestamp(&s),
        _ => None,
    })
}
