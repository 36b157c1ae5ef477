//! Two-stage date parsing for upstream date and date-time strings.
//!
//! Stage one attempts a full date-time parse (with time-zone normalization
//! to UTC); stage two falls back to a plain date. Unparseable or absent
//! input yields `None`, never an error: a malformed date upstream resolves
//! to an absent field, and ingestion of the record continues.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date-time string into a naive UTC instant.
///
/// Accepts RFC 3339 date-times (offset or `Z` suffix, normalized to UTC)
/// and offset-less `YYYY-MM-DDThh:mm:ss` values. A date-only string parses
/// to midnight so date and date-time sources can share one field shape.
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.to_utc().naive_utc());
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(instant);
    }
    parse_date(trimmed).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse a plain `YYYY-MM-DD` date. Empty or unparseable input is `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
