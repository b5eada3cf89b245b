use qublog_timer::config::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::load(&dir.path().join("absent.yaml")).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.refresh_interval_secs, 5);
    assert!(cfg.color);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let cfg = Config {
        refresh_interval_secs: 30,
        color: false,
    };
    cfg.save(&path).unwrap();

    assert_eq!(Config::load(&path).unwrap(), cfg);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "color: false\n").unwrap();

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.refresh_interval_secs, 5);
    assert!(!cfg.color);
}

#[test]
fn test_zero_interval_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "refresh_interval_secs: 0\n").unwrap();

    assert!(Config::load(&path).is_err());
}
