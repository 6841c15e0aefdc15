//! Field parsing utilities for raw string values
//!
//! Helper functions for coercing the date, number, and flag spellings found
//! in the source files. All of them return `Option`: a failed parse drops the
//! row, it never aborts the file.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date formats tried in order before the generic fallbacks
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Datetime formats whose calendar date is taken as-is
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a calendar date from any of the accepted spellings
///
/// `YYYY-MM-DD` and the day-first forms are tried literally; anything else
/// goes through the generic datetime fallbacks and is normalized to the UTC
/// calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.naive_utc().date())
}

/// Parse a number that may carry locale formatting
///
/// When a comma is present, `.` is stripped as the thousands separator and
/// `,` becomes the decimal point, so `"1.234,56"` resolves to 1234.56; plain
/// `"1234.56"` parses directly. Non-finite results are rejected.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains(',') {
        let localized = trimmed.replace('.', "").replace(',', ".");
        if let Ok(value) = localized.parse::<f64>() {
            return Some(value).filter(|v| v.is_finite());
        }
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether a placeholder-indicator field marks the row as a sentinel
pub fn is_placeholder(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true")
}
