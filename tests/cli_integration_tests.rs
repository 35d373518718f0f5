//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("employee-data").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee-data"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("employee-data").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee-data"));
}

#[test]
fn test_process_help() {
    let mut cmd = Command::cargo_bin("employee-data").unwrap();
    cmd.args(["process", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILL RULES"))
        .stdout(predicate::str::contains("Processed_Employee_Data.xlsx"));
}

// ═══════════════════════════════════════════════════════════════════════════
// PROCESS TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_process_prints_summary() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    let output = temp_dir.path().join("out.xlsx");
    common::write_employee_workbook(&input);

    let mut cmd = Command::cargo_bin("employee-data").unwrap();
    cmd.arg("process")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Highest Salary Employee"))
        .stdout(predicate::str::contains("Mia Chen"))
        .stdout(predicate::str::contains("Department + Ethnicity Analysis"))
        .stdout(predicate::str::contains("Processed data saved to"));

    assert!(output.exists());
}

#[test]
fn test_process_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    let output = temp_dir.path().join("out.xlsx");
    common::write_employee_workbook(&input);

    let assert = Command::cargo_bin("employee-data")
        .unwrap()
        .args(["process", "--json", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["max_salary"], 250000.0);
    assert_eq!(json["highest_salary"][0]["Full Name"], "Mia Chen");
    let departments = json["by_department"].as_array().unwrap();
    let it = departments
        .iter()
        .find(|d| d["department"] == "IT")
        .unwrap();
    assert!(it["age"].is_number());
}

#[test]
fn test_process_output_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    let output = temp_dir.path().join("from_env.xlsx");
    common::write_employee_workbook(&input);

    Command::cargo_bin("employee-data")
        .unwrap()
        .env("EMPLOYEE_DATA_OUTPUT", &output)
        .arg("process")
        .arg(&input)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_process_nonexistent_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.xlsx");

    let mut cmd = Command::cargo_bin("employee-data").unwrap();
    cmd.args(["process", "nonexistent.xlsx", "-o"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open Excel file"));

    assert!(!output.exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_prints_diagnostics() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    common::write_employee_workbook(&input);

    let mut cmd = Command::cargo_bin("employee-data").unwrap();
    cmd.arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("7 rows x 13 columns"))
        .stdout(predicate::str::contains("Duplicate rows: 1"));
}
