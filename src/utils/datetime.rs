//! Fixed textual date formats used on the wire.
//!
//! Request bodies carry full timestamps (`YYYY-MM-DD HH:MM:SS`), query
//! parameters carry bare dates (`YYYY-MM-DD`). All values are interpreted
//! as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Timestamp format for request/response bodies.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format for query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a body timestamp (`2024-01-01 00:00:00`) as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).map(|n| n.and_utc())
}

/// Parses a query date (`2024-06-15`) as midnight UTC.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Formats a timestamp in the body format.
pub fn format_datetime(t: DateTime<Utc>) -> String {
    t.format(DATETIME_FORMAT).to_string()
}
