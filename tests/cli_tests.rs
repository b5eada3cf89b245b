use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{live, missing_config, page, qt, stopped, write_snapshot};

const NOW: &str = "2026-10-18 14:00:00";

fn sample_page() -> qublog_timer::models::page::PageSnapshot {
    page(
        vec![
            live("entry-7", "2026-10-18 13:00:00", "2026-10-18 12:30:00", "0.5"),
            stopped("entry-3", "2.25"),
        ],
        &["today"],
    )
}

#[test]
fn test_refresh_text_output() {
    let (dir, path) = write_snapshot(&sample_page());

    qt()
        .args(["--config", &missing_config(&dir), "refresh"])
        .arg(&path)
        .args(["--now", NOW])
        .assert()
        .success()
        .stdout(contains("entry-7"))
        .stdout(contains("total 1.50"))
        .stdout(contains("elapsed 1.50"))
        .stdout(contains("at 2:00 PM"))
        .stdout(contains("day 3.75"))
        .stdout(contains("remaining 4.25"))
        .stdout(contains("quit 6:15 PM"))
        .stdout(contains("entry-3").not());
}

#[test]
fn test_refresh_json_output() {
    let (dir, path) = write_snapshot(&sample_page());

    let output = qt()
        .args(["--config", &missing_config(&dir), "refresh"])
        .arg(&path)
        .args(["--now", NOW, "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(v["entries"][0]["id"], "entry-7");
    assert_eq!(v["entries"][0]["elapsed"], "1.50");
    assert_eq!(v["entries"][0]["timestamp"], "2:00 PM");
    assert_eq!(v["summaries"]["today"]["quitting"], "6:15 PM");
    assert!(v.get("diagnostics").is_none());
}

#[test]
fn test_refresh_reports_skipped_entries_on_stderr() {
    let mut p = sample_page();
    p.entries.push(stopped("broken", "lots"));
    let (dir, path) = write_snapshot(&p);

    qt()
        .args(["--config", &missing_config(&dir), "refresh"])
        .arg(&path)
        .args(["--now", NOW])
        .assert()
        .success()
        .stdout(contains("day 3.75"))
        .stderr(contains("skipped broken"));
}

#[test]
fn test_refresh_invalid_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.json");
    fs::write(&path, "{ not json").unwrap();

    qt()
        .args(["--config", &missing_config(&dir), "refresh"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Invalid snapshot JSON"));
}

#[test]
fn test_refresh_invalid_now_fails() {
    let (dir, path) = write_snapshot(&sample_page());

    qt()
        .args(["--config", &missing_config(&dir), "refresh"])
        .arg(&path)
        .args(["--now", "teatime"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_watch_runs_requested_ticks() {
    let (dir, path) = write_snapshot(&sample_page());

    let output = qt()
        .args(["--config", &missing_config(&dir), "watch"])
        .arg(&path)
        .args(["--interval-ms", "10", "--ticks", "2", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert_eq!(v["entries"][0]["id"], "entry-7");
    }
}

#[test]
fn test_button_known_and_unknown() {
    qt()
        .args(["button", "Taskinate"])
        .assert()
        .success()
        .stdout(contains("Taskinate v-taskinate"))
        .stdout(contains(
            "remove: v-post v-start v-restart v-comment v-taskinate",
        ));

    qt()
        .args(["button", "Dance"])
        .assert()
        .failure()
        .stderr(contains("Unknown thingy button response"));
}

#[test]
fn test_config_init_and_print() {
    let dir = TempDir::new().unwrap();
    let cfg_path = dir.path().join("config.yaml");
    let cfg_arg = cfg_path.to_string_lossy().to_string();

    qt()
        .args(["--config", &cfg_arg, "config", "--init"])
        .assert()
        .success();
    assert!(cfg_path.exists());

    qt()
        .args(["--config", &cfg_arg, "config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    fs::write(&cfg_path, "refresh_interval_secs: 12\n").unwrap();
    qt()
        .args(["--config", &cfg_arg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("refresh_interval_secs: 12"))
        .stdout(contains("color: true"));
}

#[test]
fn test_watch_rejects_zero_interval() {
    let (dir, path) = write_snapshot(&sample_page());

    for flag in ["--interval", "--interval-ms"] {
        qt()
            .args(["--config", &missing_config(&dir), "watch"])
            .arg(&path)
            .args([flag, "0", "--ticks", "1"])
            .assert()
            .failure()
            .stderr(contains("invalid value '0'"));
    }
}
