//! Timestamp normalization.
//!
//! Backends send timestamps as epoch milliseconds or ISO-8601 strings. Both
//! are normalized to epoch milliseconds. Zero means "no timestamp", not the
//! Unix epoch: `0`, `null`, an empty string and an absent value all
//! normalize to `None`. A string that cannot be parsed is an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Errors produced while normalizing a timestamp value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("unparseable timestamp string {0:?}")]
    Unparseable(String),

    #[error("timestamp must be whole milliseconds, got {0}")]
    Fractional(String),

    #[error("timestamp {0} is out of range")]
    OutOfRange(String),

    #[error("timestamp must be a number or string, got {0}")]
    UnsupportedType(&'static str),
}

/// Normalizes a raw timestamp value to epoch milliseconds.
pub fn normalize_timestamp(value: Option<&Value>) -> Result<Option<i64>, TimestampError> {
    let Some(value) = value else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let millis = match n.as_i64() {
                Some(millis) => millis,
                None => match n.as_f64() {
                    Some(f) if f.fract() != 0.0 => {
                        return Err(TimestampError::Fractional(n.to_string()));
                    }
                    Some(f) if in_i64_range(f) => f as i64,
                    _ => return Err(TimestampError::OutOfRange(n.to_string())),
                },
            };
            Ok((millis != 0).then_some(millis))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            let millis = if trimmed.bytes().all(|b| b.is_ascii_digit()) {
                trimmed
                    .parse::<i64>()
                    .map_err(|_| TimestampError::Unparseable(s.clone()))?
            } else {
                parse_iso8601(trimmed)?
            };
            Ok((millis != 0).then_some(millis))
        }
        Value::Bool(_) => Err(TimestampError::UnsupportedType("boolean")),
        Value::Array(_) => Err(TimestampError::UnsupportedType("array")),
        Value::Object(_) => Err(TimestampError::UnsupportedType("object")),
    }
}

// `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
fn in_i64_range(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Parses an ISO-8601 string to epoch milliseconds.
///
/// Accepts RFC 3339 (`2023-12-25T10:30:00.000Z`, `2023-12-25T10:30:00+02:00`),
/// a date-time without offset (taken as UTC), or a bare date (UTC midnight).
pub fn parse_iso8601(s: &str) -> Result<i64, TimestampError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }
    Err(TimestampError::Unparseable(s.to_string()))
}
