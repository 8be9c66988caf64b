use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn csv_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("fivenum").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fivenum"));
}

#[test]
fn prints_text_summary() {
    let dir = TempDir::new().unwrap();
    let path = csv_file(&dir, "data.csv", "7,1,abc\n5,,3\n");
    let mut cmd = Command::cargo_bin("fivenum").unwrap();
    cmd.arg("summarize").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Five Number Summary (4 values)"))
        .stdout(predicate::str::contains("Q1: 2"))
        .stdout(predicate::str::contains("Median: 4"))
        .stdout(predicate::str::contains("IQR: 4"));
}

#[test]
fn prints_json_summary() {
    let dir = TempDir::new().unwrap();
    let path = csv_file(&dir, "data.csv", "1\n2\n3\n4\n5\n6\n7\n8\n9\n");
    let output = Command::cargo_bin("fivenum")
        .unwrap()
        .args(["summarize", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["min"], 1.0);
    assert_eq!(v["median"], 5.0);
    assert_eq!(v["max"], 9.0);
}

#[test]
fn empty_data_fails_with_validation_message() {
    let dir = TempDir::new().unwrap();
    let path = csv_file(&dir, "empty.csv", "a,b\n");
    let mut cmd = Command::cargo_bin("fivenum").unwrap();
    cmd.arg("summarize").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no numeric data found"));
}

#[test]
fn strict_flag_rejects_text() {
    let dir = TempDir::new().unwrap();
    let path = csv_file(&dir, "mixed.csv", "1,2,abc\n");
    let mut cmd = Command::cargo_bin("fivenum").unwrap();
    cmd.args(["summarize", "--strict"]).arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'abc' is not a number"));
}

#[test]
fn missing_file_reports_read_error() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fivenum").unwrap();
    cmd.arg("summarize").arg(dir.path().join("absent.csv"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn writes_plot_with_config_and_overrides() {
    let dir = TempDir::new().unwrap();
    let data = csv_file(&dir, "data.csv", "7,1,5,3\n");
    let config = csv_file(&dir, "chart.json", r#"{ "width": 800, "tick_set": "three" }"#);
    let plot = dir.path().join("box.svg");
    let mut cmd = Command::cargo_bin("fivenum").unwrap();
    cmd.arg("summarize")
        .arg(&data)
        .arg("--config")
        .arg(&config)
        .args(["--axis", "--dark", "--height", "300", "--plot"])
        .arg(&plot);
    cmd.assert().success();

    let svg = fs::read_to_string(&plot).unwrap();
    assert!(svg.contains("800"));
    assert!(svg.contains("300"));
    assert!(svg.contains("<text"));
}
