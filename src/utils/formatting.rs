//! Formatting utilities for the rendered display fields.

use chrono::{NaiveTime, Timelike};

/// Placeholder shown instead of a quitting time once the day goal is met.
pub const NO_QUITTING_TIME: &str = "-:--";

/// 12-hour clock, e.g. `9:05 AM`, `12:00 AM`, `1:05 PM`.
pub fn format_time(time: NaiveTime) -> String {
    let hour = time.hour();
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour >= 12 { "PM" } else { "AM" };

    format!("{}:{:02} {}", display_hour, time.minute(), suffix)
}

/// Round to the nearest hundredth, halves away from zero.
///
/// The rounding is applied to `hours * 100` as stored in binary floating
/// point, so `1.005` (really `100.49999999999999` once scaled) rounds down.
pub fn round_hundredths(hours: f64) -> f64 {
    let scaled = hours * 100.0;
    // past ~1e306 the scaling overflows; such values carry no fraction anyway
    if !scaled.is_finite() {
        return hours;
    }
    let rounded = scaled.round() / 100.0;
    // avoid rendering "-0.00"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Decimal hours with exactly two fraction digits, e.g. `3.75`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", round_hundredths(hours))
}
