//! Call-date parsing
//!
//! Accepts either an RFC 3339 timestamp or a plain `YYYY-MM-DD` day, which
//! is read as midnight UTC.

use crate::error::{Result, TokencostError};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a call date from user input
///
/// # Examples
///
/// ```
/// use tokencost_core::date::parse_call_date;
///
/// let day = parse_call_date("2024-06-01").unwrap();
/// assert_eq!(day.to_rfc3339(), "2024-06-01T00:00:00+00:00");
///
/// let instant = parse_call_date("2024-06-01T12:30:00+09:00").unwrap();
/// assert_eq!(instant.to_rfc3339(), "2024-06-01T03:30:00+00:00");
/// ```
pub fn parse_call_date(date_str: &str) -> Result<DateTime<Utc>> {
    let trimmed = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            TokencostError::InvalidDate(format!(
                "Invalid date format '{date_str}', expected YYYY-MM-DD or RFC 3339"
            ))
        })
}
