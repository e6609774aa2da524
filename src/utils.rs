//! Tolerant field parsers shared by the station catalog and the archive payload reader.
//!
//! Both SMHI sources are semi-structured: decimals use a comma, header text leaks into
//! data columns and placeholder tokens stand in for missing values. Every helper here
//! returns a [`ParseError`] instead of panicking so that callers can drop the offending
//! row and move on.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Tokens that the archive uses in place of a value. They are rejected before any
/// numeric conversion is attempted.
const MISSING_VALUE_SENTINELS: [&str; 5] = ["NaN", "undefined", "", "Latitud", "Longitud"];

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A single field could not be turned into a value.
///
/// Parse errors never leave this crate through the public pipeline: the row holding
/// the field is dropped and logged instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Field holds the placeholder token '{0}'")]
    Sentinel(String),

    #[error("'{0}' is not a decimal number")]
    InvalidNumber(String),

    #[error("'{0}' is not a finite number")]
    NonFinite(String),

    #[error("'{0}' is not a recognised timestamp")]
    InvalidTimestamp(String),

    #[error("Coordinate {0} is outside the valid degree range")]
    OutOfRange(String),
}

/// Parses a decimal number that may use a comma as its decimal separator.
///
/// Whitespace is trimmed first. The sentinels `NaN`, `undefined`, `Latitud`,
/// `Longitud` and the empty string are rejected, as are values that parse to an
/// infinite or NaN float.
///
/// # Examples
///
/// ```
/// use smhi_weather::parse_decimal;
///
/// assert_eq!(parse_decimal(" 59,33 "), Ok(59.33));
/// assert_eq!(parse_decimal("-1.5"), Ok(-1.5));
/// assert!(parse_decimal("Latitud").is_err());
/// ```
pub fn parse_decimal(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if MISSING_VALUE_SENTINELS.contains(&trimmed) {
        return Err(ParseError::Sentinel(trimmed.to_string()));
    }

    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_string()))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::NonFinite(trimmed.to_string()))
    }
}

/// Parses a naive timestamp as written by the archive (`2023-01-15 12:00:00`).
///
/// Also accepts minute precision, the ISO `T` separator and a bare date, which is
/// read as midnight. No timezone handling takes place: the archive reports UTC and the
/// value is kept naive.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ParseError> {
    let trimmed = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(timestamp);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ParseError::InvalidTimestamp(trimmed.to_string()))
}
