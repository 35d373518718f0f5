//! Employee Data - clean, impute and summarize employee spreadsheets
//!
//! Loads the first worksheet of an `.xlsx` file, removes duplicate rows,
//! fills missing values with column-specific heuristics, overwrites the first
//! rows with fixed sample values, computes summary statistics and writes the
//! result to a new workbook.
//!
//! # Example
//!
//! ```no_run
//! use employee_data::core::{overwrite_first_rows, Cleaner, Summary};
//! use employee_data::excel::{EmployeeExporter, EmployeeImporter};
//! use std::path::Path;
//!
//! let mut table = EmployeeImporter::new("employees.xlsx").import()?;
//! let report = Cleaner::new().clean(&mut table)?;
//! println!("Removed {} duplicate rows", report.duplicates_removed);
//!
//! overwrite_first_rows(&mut table)?;
//! let summary = Summary::from_table(&table)?;
//! println!("Departments: {}", summary.by_department.len());
//!
//! EmployeeExporter::new(&table).export(Path::new("Processed_Employee_Data.xlsx"))?;
//! # Ok::<(), employee_data::error::EmployeeError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{EmployeeError, EmployeeResult};
pub use types::{CellValue, Table};
