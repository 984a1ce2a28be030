//! Catalog selection and inspection commands.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn bell() -> Command {
    let mut cmd = Command::cargo_bin("bell").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

const CUSTOM_YAML: &str = r#"
exchanges:
  MOON:
    name: Lunar Exchange
    time_zone: UTC
    opening_time: { hours: 0, minutes: 0 }
    closing_time: { hours: 12, minutes: 0 }
    trading_days: { sun: true, mon: true, tue: true, wed: true, thu: true, fri: true, sat: true }
"#;

#[test]
fn exchanges_lists_bundled_catalog() {
    bell()
        .arg("exchanges")
        .assert()
        .success()
        .stdout(predicate::str::contains("NYSE"))
        .stdout(predicate::str::contains("Asia/Riyadh"))
        .stdout(predicate::str::contains("10:00-15:00  Saudi Exchange"));
}

#[test]
fn catalog_hash_prints_hash_line() {
    bell()
        .arg("catalog-hash")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^catalog_hash=[0-9a-f]{64}\n").unwrap());
}

#[test]
fn config_flag_replaces_bundled_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moon.yaml");
    std::fs::write(&path, CUSTOM_YAML).unwrap();
    let path_s = path.to_string_lossy().to_string();

    bell()
        .args(["--config", &path_s, "countdown", "MOON", "--now", "2026-01-05T09:00:00Z"])
        .assert()
        .success()
        .stdout("The Lunar Exchange (MOON) will close in 3 hours, 0 minutes, and 0 seconds.\n");

    bell()
        .args(["--config", &path_s, "countdown", "NYSE", "--now", "2026-01-05T09:00:00Z"])
        .assert()
        .success()
        .stdout("Exchange not found.\n");
}

#[test]
fn invalid_catalog_fails_before_running_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "exchanges:\n  BAD:\n    name: Bad\n").unwrap();
    let path_s = path.to_string_lossy().to_string();

    bell()
        .args(["--config", &path_s, "exchanges"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CATALOG_INVALID"));
}
