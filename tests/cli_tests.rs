//! CLI command tests: the full pipeline through `commands::process`

mod common;

use chrono::NaiveDate;
use employee_data::cli::commands;
use employee_data::excel::EmployeeImporter;
use employee_data::types::{columns, CellValue};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> CellValue {
    CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════════
// PROCESS COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_process_writes_cleaned_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    let output = temp_dir.path().join("processed.xlsx");
    common::write_employee_workbook(&input);

    let result = commands::process(input, output.clone(), false, false);
    assert!(result.is_ok(), "Process should succeed: {:?}", result.err());
    assert!(output.exists(), "Output file should exist");

    let table = EmployeeImporter::new(&output).import().unwrap();
    assert_eq!(table.headers, common::HEADERS.map(String::from).to_vec());
    // one duplicate removed
    assert_eq!(table.row_count(), 6);

    // first row overwritten with the sample values
    assert_eq!(table.get(0, columns::FULL_NAME), Some(&CellValue::text("Alice Johnson")));
    assert_eq!(table.get(0, columns::JOB_TITLE), Some(&CellValue::text("Software Engineer")));
    assert_eq!(table.get(0, columns::DEPARTMENT), Some(&CellValue::text("IT")));
    assert_eq!(table.get(0, columns::AGE), Some(&CellValue::Number(30.0)));
    assert_eq!(table.get(0, columns::ANNUAL_SALARY), Some(&CellValue::Number(120_000.0)));

    // untouched sixth row keeps its data
    assert_eq!(table.get(5, columns::FULL_NAME), Some(&CellValue::text("Mia Chen")));
    assert_eq!(table.get(5, columns::COUNTRY), Some(&CellValue::text("Not Provided")));
}

#[test]
fn test_process_fills_missing_values() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    let output = temp_dir.path().join("processed.xlsx");
    common::write_employee_workbook(&input);

    commands::process(input, output.clone(), true, false).unwrap();
    let table = EmployeeImporter::new(&output).import().unwrap();

    // E003: China, no ethnicity, no city
    assert_eq!(table.get(2, columns::ETHNICITY), Some(&CellValue::text("Asian")));
    assert_eq!(table.get(2, columns::CITY), Some(&CellValue::text("Not Provided")));
    assert_eq!(table.get(2, columns::EXIT_DATE), Some(&date(2015, 9, 1)));

    // E004: Brazil, no gender, age, hire date
    assert_eq!(table.get(3, columns::ETHNICITY), Some(&CellValue::text("Latino")));
    assert_eq!(table.get(3, columns::GENDER), Some(&CellValue::text("female")));
    assert_eq!(table.get(3, columns::HIRE_DATE), Some(&date(2005, 9, 1)));

    // E005: United States + Caucasian gets the modal city
    assert_eq!(table.get(4, columns::CITY), Some(&CellValue::text("Seattle")));

    // E002: bonus is the mean of the known bonuses
    let bonus = table.get(1, columns::BONUS).and_then(CellValue::as_number).unwrap();
    assert!((bonus - 0.16).abs() < 1e-9);
    assert_eq!(table.get(1, columns::EXIT_DATE), Some(&date(2040, 3, 12)));
}

#[test]
fn test_process_json_mode() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    let output = temp_dir.path().join("processed.xlsx");
    common::write_employee_workbook(&input);

    let result = commands::process(input, output.clone(), false, true);
    assert!(result.is_ok());
    assert!(output.exists());
}

#[test]
fn test_process_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("processed.xlsx");

    let result = commands::process(PathBuf::from("nonexistent.xlsx"), output.clone(), false, false);
    assert!(result.is_err(), "Process should fail on nonexistent file");
    assert!(!output.exists(), "Nothing should be written on failure");
}

#[test]
fn test_process_missing_columns() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("wrong.xlsx");
    let output = temp_dir.path().join("processed.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Name").unwrap();
    worksheet.write_string(1, 0, "Ann").unwrap();
    workbook.save(&input).unwrap();

    let result = commands::process(input, output.clone(), false, false);
    assert!(result.is_err());
    assert!(!output.exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_basic() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("employees.xlsx");
    common::write_employee_workbook(&input);

    assert!(commands::inspect(input).is_ok());
}

#[test]
fn test_inspect_nonexistent_file() {
    assert!(commands::inspect(PathBuf::from("nonexistent.xlsx")).is_err());
}
