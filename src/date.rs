//! Calendar date helpers
//!
//! All date parsing and formatting goes through this module so the rest of the
//! crate only ever sees `NaiveDate`.
//!
//! - Canonical (storage) format: `YYYY-MM-DD`
//! - Display format: `DD/MM/YYYY`
//!
//! Inputs are accepted in either format, or as a date-time string which is
//! truncated to the calendar date it was written in.

use anyhow::{Result, bail};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Format used when persisting dates
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Format used when showing dates to the user
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a user or storage supplied date
///
/// # Arguments
/// * `input` - Date string in canonical, display or date-time form
///
/// # Returns
/// The calendar date, or an error describing the accepted formats
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, CANONICAL_FORMAT) {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DISPLAY_FORMAT) {
        return Ok(date);
    }
    // Offsets are kept as written: "2023-05-05T23:30:00-02:00" is the 5th.
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(date_time.date());
        }
    }

    bail!(
        "Invalid date '{}'. Use YYYY-MM-DD (e.g., '2025-03-15') or DD/MM/YYYY",
        input
    )
}

/// Format a date in the canonical `YYYY-MM-DD` form
pub fn format_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Format a date in the `DD/MM/YYYY` display form
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Serde adapter storing dates canonically and reading any accepted input
///
/// Use with `#[serde(with = "crate::date::serde_date")]`.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_canonical(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}
