use super::work_entry::EntrySnapshot;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the refresher reads on one tick: the entries in page order
/// and the ids of the day-summary elements (often none).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageSnapshot {
    #[serde(default)]
    pub entries: Vec<EntrySnapshot>,
    #[serde(default)]
    pub day_summaries: Vec<String>,
}

impl PageSnapshot {
    pub fn from_json(s: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
