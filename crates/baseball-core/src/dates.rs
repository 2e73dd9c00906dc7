//! Calendar-day parsing
//!
//! Every date in the store is a calendar day. Timestamps supplied by callers
//! are truncated to their date so that update matching and date filters
//! never depend on a time-of-day component.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::{BaseballError, Result};

const DAY_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a descriptor date value
///
/// Accepts `YYYY-MM-DD`, `YYYYMMDD`, `MM/DD/YYYY`, RFC 3339 timestamps and
/// `YYYY-MM-DD[T ]HH:MM:SS`; timestamps are truncated to their date.
///
/// # Errors
///
/// Returns `FormatError` naming `key` when no format matches.
pub fn parse_date(key: &str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();

    if let Some(date) = parse_compact(trimmed) {
        return Ok(date);
    }
    for format in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(stamp.date());
        }
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }

    Err(BaseballError::format(key, value, "a calendar date"))
}

/// Parse an 8-digit `YYYYMMDD` date as written in game logs
pub fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_supported_formats() {
        assert_eq!(parse_date("Date", "2021-04-01").unwrap(), day(2021, 4, 1));
        assert_eq!(parse_date("Date", "20210401").unwrap(), day(2021, 4, 1));
        assert_eq!(parse_date("Date", "04/01/2021").unwrap(), day(2021, 4, 1));
    }

    #[test]
    fn test_timestamps_truncate_to_day() {
        assert_eq!(
            parse_date("Date", "2021-04-01T19:05:00").unwrap(),
            day(2021, 4, 1)
        );
        assert_eq!(
            parse_date("Date", "2021-04-01 23:59:59").unwrap(),
            day(2021, 4, 1)
        );
        assert_eq!(
            parse_date("Date", "2021-04-01T19:05:00+00:00").unwrap(),
            day(2021, 4, 1)
        );
    }

    #[test]
    fn test_invalid_date_is_format_error() {
        let err = parse_date("dateFrom", "yesterday").unwrap_err();
        assert!(matches!(
            err,
            BaseballError::FormatError { ref key, .. } if key == "dateFrom"
        ));
        assert!(parse_date("Date", "20211301").is_err());
    }

    #[test]
    fn test_parse_compact_rejects_wrong_width() {
        assert_eq!(parse_compact("2021041"), None);
        assert_eq!(parse_compact("2021-4-1"), None);
        assert_eq!(parse_compact("18710504"), Some(day(1871, 5, 4)));
    }
}
