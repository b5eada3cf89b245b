use crate::core::calculator::quitting;
use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DaySummary {
    pub total_hours: f64,
    pub target_hours: f64,
    pub remaining_hours: f64,
    /// `None` once the target is reached
    pub quitting_time: Option<NaiveTime>,
}

impl DaySummary {
    pub const TARGET_HOURS: f64 = 8.0;

    pub fn compute(total_hours: f64, now: NaiveTime) -> Self {
        let remaining_hours = quitting::remaining_hours(total_hours, Self::TARGET_HOURS);
        Self {
            total_hours,
            target_hours: Self::TARGET_HOURS,
            remaining_hours,
            quitting_time: quitting::quitting_time(now, remaining_hours),
        }
    }
}
