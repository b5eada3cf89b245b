#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use qublog_timer::models::page::PageSnapshot;
use qublog_timer::models::work_entry::{EntrySnapshot, EntryState};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn qt() -> Command {
    cargo_bin_cmd!("qublog-timer")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn live(id: &str, load: &str, start: &str, total: &str) -> EntrySnapshot {
    EntrySnapshot::new(id, EntryState::Live)
        .with_load_time(load)
        .with_start_time(start)
        .with_total_duration(total)
}

pub fn frozen(id: &str, load: &str, total: &str, elapsed: &str) -> EntrySnapshot {
    EntrySnapshot::new(id, EntryState::Frozen)
        .with_load_time(load)
        .with_total_duration(total)
        .with_elapsed_duration(elapsed)
}

pub fn stopped(id: &str, elapsed: &str) -> EntrySnapshot {
    EntrySnapshot::new(id, EntryState::Stopped).with_elapsed_duration(elapsed)
}

pub fn page(entries: Vec<EntrySnapshot>, summaries: &[&str]) -> PageSnapshot {
    PageSnapshot {
        entries,
        day_summaries: summaries.iter().map(|s| s.to_string()).collect(),
    }
}

/// Write a snapshot into a fresh temp dir; keep the TempDir alive while in use.
pub fn write_snapshot(page: &PageSnapshot) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("page.json");
    fs::write(&path, serde_json::to_string(page).expect("serialize")).expect("write snapshot");
    (dir, path)
}

/// A config path that does not exist, so the defaults are used.
pub fn missing_config(dir: &TempDir) -> String {
    dir.path()
        .join("no-such-config.yaml")
        .to_string_lossy()
        .to_string()
}
