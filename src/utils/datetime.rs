//! Date and time utility functions
//!
//! This module provides parsing and display formatting for the item `date`
//! field, the creation timestamp, and the "last sync" indicator.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Standard date format used for the persisted `date` field
pub const ITEM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default display format for item dates, e.g. "Nov 15, 2023"
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), ITEM_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ITEM_DATE_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Format an item date for display using a strftime pattern.
///
/// Falls back to YYYY-MM-DD when the pattern cannot render a date.
pub fn format_display_date(d: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", d.format(pattern)).is_err() {
        return format_ymd(d);
    }
    out
}

/// Whether a strftime pattern parses and can render a plain date
pub fn is_valid_date_format(pattern: &str) -> bool {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut out = String::new();
    write!(out, "{}", NaiveDate::MIN.format(pattern)).is_ok()
}

/// Format a UTC instant as local wall-clock time (`HH:MM` style patterns)
pub fn format_local_time(instant: DateTime<Utc>, pattern: &str) -> String {
    let local = instant.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_err() {
        return local.format("%H:%M").to_string();
    }
    out
}

/// Format a UTC instant as a full local date and time
pub fn format_local_datetime(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Milliseconds since the Unix epoch, used as a fresh item id
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let date = parse_date(" 2023-11-15 ").unwrap();
        assert_eq!(format_ymd(date), "2023-11-15");
    }

    #[test]
    fn display_format_matches_short_month_style() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        assert_eq!(format_display_date(date, DISPLAY_DATE_FORMAT), "Nov 5, 2023");
    }

    #[test]
    fn time_only_pattern_cannot_render_a_date() {
        assert!(!is_valid_date_format("%H:%M"));
        assert!(is_valid_date_format(DISPLAY_DATE_FORMAT));
    }
}
