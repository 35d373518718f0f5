//! Fixed sample values written over the first rows of the table

use crate::error::EmployeeResult;
use crate::types::{columns, CellValue, Table};
use tracing::{debug, warn};

/// One replacement tuple: Full Name, Job Title, Department, Age, Annual Salary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub full_name: &'static str,
    pub job_title: &'static str,
    pub department: &'static str,
    pub age: f64,
    pub annual_salary: f64,
}

pub const SAMPLE_ROWS: [SampleRow; 5] = [
    SampleRow {
        full_name: "Alice Johnson",
        job_title: "Software Engineer",
        department: "IT",
        age: 30.0,
        annual_salary: 120_000.0,
    },
    SampleRow {
        full_name: "Bob Smith",
        job_title: "Data Scientist",
        department: "IT",
        age: 35.0,
        annual_salary: 135_000.0,
    },
    SampleRow {
        full_name: "Charlie Brown",
        job_title: "Marketing Manager",
        department: "Marketing",
        age: 40.0,
        annual_salary: 95_000.0,
    },
    SampleRow {
        full_name: "Diana Prince",
        job_title: "HR Specialist",
        department: "HR",
        age: 32.0,
        annual_salary: 85_000.0,
    },
    SampleRow {
        full_name: "Ethan Hunt",
        job_title: "Sales Executive",
        department: "Sales",
        age: 45.0,
        annual_salary: 110_000.0,
    },
];

/// Overwrite the first rows (by position) with `SAMPLE_ROWS`.
///
/// A table shorter than five rows is partially overwritten. Returns the
/// number of rows written.
pub fn overwrite_first_rows(table: &mut Table) -> EmployeeResult<usize> {
    let full_name = table.require_column(columns::FULL_NAME)?;
    let job_title = table.require_column(columns::JOB_TITLE)?;
    let department = table.require_column(columns::DEPARTMENT)?;
    let age = table.require_column(columns::AGE)?;
    let salary = table.require_column(columns::ANNUAL_SALARY)?;

    if table.row_count() < SAMPLE_ROWS.len() {
        warn!(
            "Only {} row(s) available; overwriting {} of {} sample rows",
            table.row_count(),
            table.row_count(),
            SAMPLE_ROWS.len()
        );
    }

    let mut written = 0;
    for (row, sample) in table.rows.iter_mut().zip(SAMPLE_ROWS.iter()) {
        row[full_name] = CellValue::text(sample.full_name);
        row[job_title] = CellValue::text(sample.job_title);
        row[department] = CellValue::text(sample.department);
        row[age] = CellValue::Number(sample.age);
        row[salary] = CellValue::Number(sample.annual_salary);
        written += 1;
    }

    debug!("Overwrote {} row(s) with sample values", written);
    Ok(written)
}
