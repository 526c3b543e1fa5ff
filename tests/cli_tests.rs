//! Integration tests for the CLI interface
//!
//! Tests the main entry point and command parsing logic

mod common;

use assert_cmd::Command;
use common::{small_northwind, DataDir};
use predicates::prelude::*;
use tempfile::TempDir;

fn salesboard() -> Command {
    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    for var in [
        "SALESBOARD_DATA_DIR",
        "SALESBOARD_DATABASE_URL",
        "SALESBOARD_OUTPUT",
        "SALESBOARD_FORMAT",
        "SALESBOARD_LOG_LEVEL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help_default() {
    // Running without arguments shows help
    salesboard()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_report_help() {
    salesboard()
        .arg("report")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("write the report file"));
}

#[test]
fn test_invalid_command() {
    salesboard()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_report_writes_csv() {
    let data = DataDir::with_records(&small_northwind()).unwrap();
    let output = data.output("out").join("stats.csv");

    salesboard()
        .arg("report")
        .arg("--data-dir")
        .arg(data.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 employee rows"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("Employee ID,Last Name,First Name,Total Sales"));
    assert!(content.contains("3,Leverling,Janet,0,0,0,,,,,,"));
}

#[test]
fn test_show_single_employee() {
    let data = DataDir::with_records(&small_northwind()).unwrap();

    salesboard()
        .arg("show")
        .arg("--data-dir")
        .arg(data.path())
        .arg("--employee")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fuller"))
        .stdout(predicate::str::contains("Davolio").not());
}

#[test]
fn test_show_unknown_employee_fails() {
    let data = DataDir::with_records(&small_northwind()).unwrap();

    salesboard()
        .arg("show")
        .arg("--data-dir")
        .arg(data.path())
        .arg("--employee")
        .arg("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Employee 99 not found"));
}

#[test]
fn test_report_missing_data_dir_fails() {
    let temp = TempDir::new().unwrap();

    salesboard()
        .arg("report")
        .arg("--data-dir")
        .arg(temp.path().join("nowhere"))
        .arg("-o")
        .arg(temp.path().join("stats.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!temp.path().join("stats.csv").exists());
}

#[test]
fn test_config_file_and_print() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("salesboard.toml");
    std::fs::write(
        &config_path,
        "[report]\noutput = \"weekly.json\"\nsink_retries = 4\n",
    )
    .unwrap();

    salesboard()
        .arg("--config")
        .arg(&config_path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("output = \"weekly.json\""))
        .stdout(predicate::str::contains("sink_retries = 4"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();

    salesboard()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
