use crate::errors::{AppError, AppResult};
use crate::utils::time::{parse_hours, parse_timestamp};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which marker the host page put on the entry element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// Running, elapsed time advances with the wall clock
    Live,
    /// Running, but elapsed time is the precomputed value
    Frozen,
    /// Not running
    Stopped,
}

impl EntryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryState::Live => "live",
            EntryState::Frozen => "frozen",
            EntryState::Stopped => "stopped",
        }
    }
}

/// Raw attribute snapshot of one entry element, exactly as the host read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntrySnapshot {
    pub id: String,
    pub state: EntryState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_duration: Option<String>,
}

impl EntrySnapshot {
    pub fn new(id: impl Into<String>, state: EntryState) -> Self {
        Self {
            id: id.into(),
            state,
            load_time: None,
            start_time: None,
            total_duration: None,
            elapsed_duration: None,
        }
    }

    pub fn with_load_time(mut self, v: impl Into<String>) -> Self {
        self.load_time = Some(v.into());
        self
    }

    pub fn with_start_time(mut self, v: impl Into<String>) -> Self {
        self.start_time = Some(v.into());
        self
    }

    pub fn with_total_duration(mut self, v: impl Into<String>) -> Self {
        self.total_duration = Some(v.into());
        self
    }

    pub fn with_elapsed_duration(mut self, v: impl Into<String>) -> Self {
        self.elapsed_duration = Some(v.into());
        self
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> AppResult<&'a str> {
    value.as_deref().ok_or(AppError::MissingAttribute(name))
}

/// A parsed entry. Live entries recompute elapsed time, frozen and stopped
/// entries carry a precomputed one; the variant decides which path applies.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkEntry {
    Live {
        load_time: NaiveDateTime,
        start_time: NaiveDateTime,
        total_duration_at_load: f64,
    },
    Frozen {
        load_time: NaiveDateTime,
        total_duration_at_load: f64,
        elapsed_duration: f64,
    },
    Stopped {
        elapsed_duration: f64,
    },
}

impl WorkEntry {
    /// Parse every attribute the entry's state needs. Attributes the state
    /// does not use are ignored, even when malformed.
    pub fn from_snapshot(snap: &EntrySnapshot) -> AppResult<Self> {
        let entry = match snap.state {
            EntryState::Live => WorkEntry::Live {
                load_time: parse_timestamp(required(&snap.load_time, "load_time")?)?,
                start_time: parse_timestamp(required(&snap.start_time, "start_time")?)?,
                total_duration_at_load: parse_hours(required(
                    &snap.total_duration,
                    "total_duration",
                )?)?,
            },
            EntryState::Frozen => WorkEntry::Frozen {
                load_time: parse_timestamp(required(&snap.load_time, "load_time")?)?,
                total_duration_at_load: parse_hours(required(
                    &snap.total_duration,
                    "total_duration",
                )?)?,
                elapsed_duration: parse_hours(required(
                    &snap.elapsed_duration,
                    "elapsed_duration",
                )?)?,
            },
            EntryState::Stopped => WorkEntry::Stopped {
                elapsed_duration: parse_hours(required(
                    &snap.elapsed_duration,
                    "elapsed_duration",
                )?)?,
            },
        };
        Ok(entry)
    }

    pub fn is_running(&self) -> bool {
        !matches!(self, WorkEntry::Stopped { .. })
    }

    pub fn is_active_span(&self) -> bool {
        matches!(self, WorkEntry::Live { .. })
    }
}
