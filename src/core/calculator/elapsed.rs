use crate::models::work_entry::WorkEntry;
use crate::utils::time::hours_between;
use chrono::NaiveDateTime;

/// Hours this entry adds to the day total at `now`.
pub fn elapsed_hours(entry: &WorkEntry, now: NaiveDateTime) -> f64 {
    match *entry {
        WorkEntry::Live { start_time, .. } => hours_between(start_time, now),
        WorkEntry::Frozen {
            elapsed_duration, ..
        }
        | WorkEntry::Stopped { elapsed_duration } => elapsed_duration,
    }
}

/// Running total at `now`: the total known at load plus the time since load.
/// Stopped entries have no running total.
pub fn running_total(entry: &WorkEntry, now: NaiveDateTime) -> Option<f64> {
    match *entry {
        WorkEntry::Live {
            load_time,
            total_duration_at_load,
            ..
        }
        | WorkEntry::Frozen {
            load_time,
            total_duration_at_load,
            ..
        } => Some(total_duration_at_load + hours_between(load_time, now)),
        WorkEntry::Stopped { .. } => None,
    }
}
