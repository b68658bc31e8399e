//! Validation helper functions for user input
//!
//! This module turns raw strings from the command line or the shell into
//! domain values: filter names, todo IDs, due dates and todo text.

use crate::date;
use crate::todo::{Filter, TodoId};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Parse and validate a filter name
///
/// # Arguments
/// * `filter_str` - One of all, today, overdue, scheduled, pending, completed
///
/// # Returns
/// Result containing parsed Filter or error
pub fn parse_filter(filter_str: &str) -> Result<Filter> {
    filter_str.parse::<Filter>().map_err(|e| anyhow!(e))
}

/// Parse and validate a todo ID
pub fn parse_id(id_str: &str) -> Result<TodoId> {
    id_str.parse::<TodoId>().map_err(|e| anyhow!(e))
}

/// Parse an optional due date
///
/// # Returns
/// * `Ok(None)` - input is empty or whitespace, so creation is rejected
/// * `Ok(Some(date))` - input parsed
/// * `Err(_)` - input is present but not a date
pub fn parse_due_date(date_str: &str) -> Result<Option<NaiveDate>> {
    if date_str.trim().is_empty() {
        return Ok(None);
    }
    date::parse_date(date_str).map(Some)
}

/// Normalize todo text
///
/// Trims surrounding whitespace and converts CR/CRLF line endings to LF.
///
/// # Returns
/// The normalized text, or `None` if nothing is left
pub fn normalize_text(text: &str) -> Option<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
