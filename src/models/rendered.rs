use serde::Serialize;
use std::collections::BTreeMap;

/// Text to write into one entry element. `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    pub total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedSummary {
    pub total: String,
    pub remaining: String,
    pub quitting: String,
}

/// An entry that was left out of this tick.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryDiagnostic {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RefreshOutput {
    pub entries: Vec<RenderedEntry>,
    pub summaries: BTreeMap<String, RenderedSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<EntryDiagnostic>,
}

impl RefreshOutput {
    pub fn entry(&self, id: &str) -> Option<&RenderedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
