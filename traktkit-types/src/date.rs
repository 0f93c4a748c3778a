//! Fixed wire formats for dates and timestamps.
//!
//! Two formats are used across the whole model set:
//! - Calendar dates: `YYYY-MM-DD`, exactly ten characters, zero-padded
//!   (`2010-12-16`).
//! - Timestamps: RFC 3339. Encoding emits UTC with a `Z` suffix and at
//!   least millisecond precision (`2014-11-19T21:42:41.000Z`); finer values
//!   keep their micro- or nanoseconds. Decoding accepts any offset and
//!   normalises to UTC.
//!
//! Both formats only carry four-digit years, so values outside
//! [`YEAR_RANGE`] cannot be formatted.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use std::ops::RangeInclusive;

/// `chrono` format string for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length in bytes of an encoded calendar date.
pub const DATE_LEN: usize = 10;

/// Years representable in both wire formats.
pub const YEAR_RANGE: RangeInclusive<i32> = 0..=9999;

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Rejects anything that is not exactly ten characters with dashes at
/// positions 4 and 7, so `2010-1-5` and `2010-01-05T00:00:00Z` both fail.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Formats a calendar date as `YYYY-MM-DD`.
///
/// Returns `None` when the year is outside [`YEAR_RANGE`].
#[must_use]
pub fn format_date(date: &NaiveDate) -> Option<String> {
    YEAR_RANGE
        .contains(&date.year())
        .then(|| date.format(DATE_FORMAT).to_string())
}

/// Parses an RFC 3339 timestamp and converts it to UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Formats a timestamp as RFC 3339 UTC.
///
/// Whole milliseconds are written with exactly three fractional digits;
/// anything finer is written in full. Returns `None` when the year is
/// outside [`YEAR_RANGE`].
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> Option<String> {
    if !YEAR_RANGE.contains(&ts.year()) {
        return None;
    }
    let precision = if ts.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    Some(ts.to_rfc3339_opts(precision, true))
}
