//! Attribute parsing: timestamps and hour values as the host page emits them.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Parse a timestamp into local wall-clock time.
///
/// Values carrying an offset (RFC 3339, RFC 2822) are converted to the local
/// zone; naive values are taken as already local. A bare date is midnight.
pub fn parse_timestamp(raw: &str) -> AppResult<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::InvalidTimestamp(raw.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))
}

/// Parse a decimal hour value; `NaN` and infinities are rejected.
pub fn parse_hours(raw: &str) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidDuration(raw.to_string()))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::InvalidDuration(raw.to_string()))
    }
}

/// Fractional hours from `from` to `to` (negative if `to` is earlier).
pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_HOUR
}
