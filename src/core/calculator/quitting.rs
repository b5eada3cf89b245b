//! Remaining hours against the daily target and the projected quitting time.

use chrono::{NaiveTime, Timelike};

pub fn remaining_hours(total_hours: f64, target_hours: f64) -> f64 {
    (target_hours - total_hours).max(0.0)
}

/// `now` plus `remaining` whole minutes (floored), clamped to 23:59.
/// `None` when nothing remains.
pub fn quitting_time(now: NaiveTime, remaining: f64) -> Option<NaiveTime> {
    if remaining == 0.0 {
        return None;
    }

    let end_of_day = NaiveTime::from_hms_opt(23, 59, 0);
    // a whole day or more always lands past midnight
    if remaining >= 24.0 {
        return end_of_day;
    }

    let hours = remaining.floor();
    let minutes = ((remaining - hours) * 60.0).floor() as i64;

    let mut quit_hour = now.hour() as i64 + hours as i64;
    let mut quit_min = now.minute() as i64 + minutes;

    if quit_min >= 60 {
        quit_hour += 1;
        quit_min -= 60;
    }

    if quit_hour >= 24 {
        return end_of_day;
    }

    NaiveTime::from_hms_opt(quit_hour as u32, quit_min as u32, 0)
}
