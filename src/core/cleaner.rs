//! Duplicate removal and missing-value imputation
//!
//! The fill rules run in a fixed order because later rules read columns that
//! earlier rules fill (Ethnicity reads Country, City reads Country and
//! Ethnicity, Exit Date reads Gender, Age and Hire Date). Every statistic a
//! rule needs is computed once, before that rule writes anything.

use crate::core::dates::{add_years, coerce_date, coerce_number};
use crate::core::stats;
use crate::error::EmployeeResult;
use crate::types::{columns, CellValue, Row, Table};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Literal used for text columns with no better estimate
pub const NOT_PROVIDED: &str = "Not Provided";

/// Literal used for Department when the table has no department at all
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Literal used for Job Title when the row's department has no known title
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Retirement age by normalized gender
const RETIREMENT_AGES: [(&str, f64); 2] = [("male", 60.0), ("female", 55.0)];

/// Country → Ethnicity used when Ethnicity is missing
const ETHNICITY_BY_COUNTRY: [(&str, &str); 2] = [("China", "Asian"), ("Brazil", "Latino")];

/// Country and Ethnicity that receive the modal City instead of the placeholder
const CITY_MODE_COUNTRY: &str = "United States";
const CITY_MODE_ETHNICITY: &str = "Caucasian";

/// Number of cells one rule filled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillCount {
    pub column: String,
    pub cells: usize,
}

/// What a cleaning pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub rows_before: usize,
    pub duplicates_removed: usize,
    /// One entry per fill rule, in execution order
    pub filled: Vec<FillCount>,
}

impl CleaningReport {
    fn record(&mut self, column: &str, cells: usize) {
        debug!("Filled {} missing value(s) in '{}'", cells, column);
        self.filled.push(FillCount {
            column: column.to_string(),
            cells,
        });
    }

    /// Cells filled in a column (0 if the rule did not run)
    pub fn filled_in(&self, column: &str) -> usize {
        self.filled
            .iter()
            .filter(|f| f.column == column)
            .map(|f| f.cells)
            .sum()
    }

    pub fn total_filled(&self) -> usize {
        self.filled.iter().map(|f| f.cells).sum()
    }
}

/// Column positions of every column the cleaner touches
struct Layout {
    full_name: usize,
    job_title: usize,
    department: usize,
    age: usize,
    salary: usize,
    bonus: usize,
    gender: usize,
    country: usize,
    ethnicity: usize,
    city: usize,
    hire_date: usize,
    exit_date: usize,
}

impl Layout {
    fn resolve(table: &Table) -> EmployeeResult<Self> {
        Ok(Self {
            full_name: table.require_column(columns::FULL_NAME)?,
            job_title: table.require_column(columns::JOB_TITLE)?,
            department: table.require_column(columns::DEPARTMENT)?,
            age: table.require_column(columns::AGE)?,
            salary: table.require_column(columns::ANNUAL_SALARY)?,
            bonus: table.require_column(columns::BONUS)?,
            gender: table.require_column(columns::GENDER)?,
            country: table.require_column(columns::COUNTRY)?,
            ethnicity: table.require_column(columns::ETHNICITY)?,
            city: table.require_column(columns::CITY)?,
            hire_date: table.require_column(columns::HIRE_DATE)?,
            exit_date: table.require_column(columns::EXIT_DATE)?,
        })
    }
}

/// Employee table cleaner.
///
/// The fields are the literals written where no estimate exists. Cleaning a
/// cleaned table is a no-op, placeholders included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    /// Full Name, Country, Gender, Ethnicity and City without an estimate
    pub not_provided: String,
    /// Department when the table has no department at all
    pub not_assigned: String,
    /// Job Title when neither the department group nor the row has one
    pub unknown_title: String,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self {
            not_provided: NOT_PROVIDED.to_string(),
            not_assigned: NOT_ASSIGNED.to_string(),
            unknown_title: UNKNOWN_TITLE.to_string(),
        }
    }
}

impl Cleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deduplicate, coerce typed columns and fill missing values in place.
    ///
    /// Only a missing required header is an error; unparseable values become
    /// absent and absent values that cannot be estimated stay absent.
    pub fn clean(&self, table: &mut Table) -> EmployeeResult<CleaningReport> {
        let cols = Layout::resolve(table)?;
        let mut report = CleaningReport {
            rows_before: table.row_count(),
            ..Default::default()
        };

        report.duplicates_removed = remove_duplicates(table);
        if report.duplicates_removed > 0 {
            debug!("Removed {} duplicate row(s)", report.duplicates_removed);
        }

        self.parse_typed_columns(table, &cols);

        report.record(
            columns::FULL_NAME,
            fill_constant(table, cols.full_name, &self.not_provided),
        );
        report.record(
            columns::COUNTRY,
            fill_constant(table, cols.country, &self.not_provided),
        );
        report.record(
            columns::GENDER,
            fill_with_mode(table, cols.gender, &self.not_provided),
        );

        // Rows the department mode cannot reach get the placeholder
        let titles = fill_with_group_mode(table, cols.job_title, cols.department)
            + fill_constant(table, cols.job_title, &self.unknown_title);
        report.record(columns::JOB_TITLE, titles);

        report.record(
            columns::DEPARTMENT,
            fill_with_mode(table, cols.department, &self.not_assigned),
        );
        report.record(columns::ETHNICITY, self.fill_ethnicity(table, &cols));

        let median_age = stats::median(table.column(cols.age));
        report.record(columns::AGE, fill_number(table, cols.age, median_age));

        let median_salary = stats::median(table.column(cols.salary));
        let salaries = fill_with_group_median(table, cols.salary, cols.job_title)
            + fill_number(table, cols.salary, median_salary);
        report.record(columns::ANNUAL_SALARY, salaries);

        let mean_bonus = stats::mean(table.column(cols.bonus));
        report.record(columns::BONUS, fill_number(table, cols.bonus, mean_bonus));

        report.record(columns::HIRE_DATE, fill_hire_date(table, &cols));
        report.record(columns::CITY, self.fill_city(table, &cols));
        report.record(columns::EXIT_DATE, fill_exit_date(table, &cols));

        info!(
            "Cleaned {} row(s): {} duplicate(s) removed, {} cell(s) filled",
            report.rows_before,
            report.duplicates_removed,
            report.total_filled()
        );
        Ok(report)
    }

    /// Dates and Age to typed values, Gender to trimmed lowercase text.
    /// The gender placeholder is kept as written.
    fn parse_typed_columns(&self, table: &mut Table, cols: &Layout) {
        for row in &mut table.rows {
            row[cols.hire_date] = coerce_date(&row[cols.hire_date]);
            row[cols.exit_date] = coerce_date(&row[cols.exit_date]);
            row[cols.age] = coerce_number(&row[cols.age]);
            row[cols.gender] = match &row[cols.gender] {
                CellValue::Text(s) if s.trim() == self.not_provided => {
                    CellValue::text(self.not_provided.as_str())
                }
                CellValue::Text(s) => CellValue::Text(s.trim().to_lowercase()),
                _ => CellValue::Empty,
            };
        }
    }

    fn fill_ethnicity(&self, table: &mut Table, cols: &Layout) -> usize {
        let mut filled = 0;
        for row in &mut table.rows {
            if !row[cols.ethnicity].is_blank() {
                continue;
            }
            let country = row[cols.country].as_text();
            let ethnicity = ETHNICITY_BY_COUNTRY
                .iter()
                .find(|(c, _)| Some(*c) == country)
                .map_or(self.not_provided.as_str(), |(_, e)| *e);
            row[cols.ethnicity] = CellValue::text(ethnicity);
            filled += 1;
        }
        filled
    }

    fn fill_city(&self, table: &mut Table, cols: &Layout) -> usize {
        let modal_city = stats::mode_non_blank(table.column(cols.city))
            .unwrap_or_else(|| CellValue::text(self.not_provided.as_str()));

        let mut filled = 0;
        for row in &mut table.rows {
            if !row[cols.city].is_blank() {
                continue;
            }
            let gets_mode = row[cols.country].as_text() == Some(CITY_MODE_COUNTRY)
                && row[cols.ethnicity].as_text() == Some(CITY_MODE_ETHNICITY);
            row[cols.city] = if gets_mode {
                modal_city.clone()
            } else {
                CellValue::text(self.not_provided.as_str())
            };
            filled += 1;
        }
        filled
    }
}

fn fill_hire_date(table: &mut Table, cols: &Layout) -> usize {
    let earliest = table
        .column(cols.hire_date)
        .filter_map(CellValue::as_date)
        .min();
    match earliest {
        Some(date) => fill_value(table, cols.hire_date, &CellValue::Date(date)),
        None => 0,
    }
}

/// Exit Date = Hire Date + (retirement age - Age) years, for rows whose
/// gender has a retirement age and whose Age and Hire Date are known
fn fill_exit_date(table: &mut Table, cols: &Layout) -> usize {
    let mut filled = 0;
    for row in &mut table.rows {
        if !row[cols.exit_date].is_empty() {
            continue;
        }
        let Some(retirement_age) = retirement_age(&row[cols.gender]) else {
            continue;
        };
        let (Some(age), Some(hired)) = (row[cols.age].as_number(), row[cols.hire_date].as_date())
        else {
            continue;
        };
        if let Some(exit) = add_years(hired, retirement_age - age) {
            row[cols.exit_date] = CellValue::Date(exit);
            filled += 1;
        }
    }
    filled
}

fn retirement_age(gender: &CellValue) -> Option<f64> {
    let gender = gender.as_text()?;
    RETIREMENT_AGES
        .iter()
        .find(|(g, _)| *g == gender)
        .map(|(_, age)| *age)
}

/// Flag every row that repeats an earlier row exactly
pub fn duplicate_flags(rows: &[Row]) -> Vec<bool> {
    let mut seen: HashSet<&Row> = HashSet::with_capacity(rows.len());
    rows.iter().map(|row| !seen.insert(row)).collect()
}

/// Remove exact duplicate rows, keeping first occurrences in order.
/// Returns the number of rows removed.
pub fn remove_duplicates(table: &mut Table) -> usize {
    let flags = duplicate_flags(&table.rows);
    let before = table.rows.len();
    let mut flags = flags.into_iter();
    table.rows.retain(|_| !flags.next().unwrap_or(false));
    before - table.rows.len()
}

/// Set every absent cell of a column to `value`
fn fill_value(table: &mut Table, col: usize, value: &CellValue) -> usize {
    let mut filled = 0;
    for row in &mut table.rows {
        if row[col].is_empty() {
            row[col] = value.clone();
            filled += 1;
        }
    }
    filled
}

fn fill_constant(table: &mut Table, col: usize, literal: &str) -> usize {
    fill_value(table, col, &CellValue::text(literal))
}

fn fill_number(table: &mut Table, col: usize, value: Option<f64>) -> usize {
    match value {
        Some(n) => fill_value(table, col, &CellValue::Number(n)),
        None => 0,
    }
}

/// Fill with the column's modal value, or `fallback` when the column is empty
fn fill_with_mode(table: &mut Table, col: usize, fallback: &str) -> usize {
    let value = stats::mode(table.column(col)).unwrap_or_else(|| CellValue::text(fallback));
    fill_value(table, col, &value)
}

/// Collect the `target` cells of each `group` value; rows with an absent
/// group value belong to no group
fn group_cells(table: &Table, target: usize, group: usize) -> HashMap<CellValue, Vec<CellValue>> {
    let mut groups: HashMap<CellValue, Vec<CellValue>> = HashMap::new();
    for row in &table.rows {
        if !row[group].is_groupable() {
            continue;
        }
        groups
            .entry(row[group].clone())
            .or_default()
            .push(row[target].clone());
    }
    groups
}

/// Fill each absent cell from a per-group estimate. Rows without a group, or
/// whose group has no estimate, stay absent.
fn fill_from_groups(
    table: &mut Table,
    target: usize,
    group: usize,
    estimates: &HashMap<CellValue, CellValue>,
) -> usize {
    let mut filled = 0;
    for row in &mut table.rows {
        if !row[target].is_empty() {
            continue;
        }
        if let Some(value) = estimates.get(&row[group]) {
            row[target] = value.clone();
            filled += 1;
        }
    }
    filled
}

fn fill_with_group_mode(table: &mut Table, target: usize, group: usize) -> usize {
    let estimates: HashMap<CellValue, CellValue> = group_cells(table, target, group)
        .into_iter()
        .filter_map(|(key, cells)| stats::mode(&cells).map(|mode| (key, mode)))
        .collect();
    fill_from_groups(table, target, group, &estimates)
}

fn fill_with_group_median(table: &mut Table, target: usize, group: usize) -> usize {
    let estimates: HashMap<CellValue, CellValue> = group_cells(table, target, group)
        .into_iter()
        .filter_map(|(key, cells)| stats::median(&cells).map(|m| (key, CellValue::Number(m))))
        .collect();
    fill_from_groups(table, target, group, &estimates)
}
