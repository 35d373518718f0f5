//! Summary statistics over a cleaned table

use crate::core::stats;
use crate::error::EmployeeResult;
use crate::types::{columns, CellValue, Table};
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean Age and Annual Salary of one department
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartmentMeans {
    pub age: Option<f64>,
    pub salary: Option<f64>,
}

/// Max / min / median of one numeric column within a group
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Spread {
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub median: Option<f64>,
}

impl Spread {
    fn of(values: &[&CellValue]) -> Self {
        Self {
            max: stats::max(values.iter().copied()),
            min: stats::min(values.iter().copied()),
            median: stats::median(values.iter().copied()),
        }
    }
}

/// Age and salary spread of one (Department, Ethnicity) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub department: CellValue,
    pub ethnicity: CellValue,
    pub age: Spread,
    pub salary: Spread,
}

/// Everything the pipeline reports after cleaning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub max_salary: Option<f64>,
    /// Row indices whose Annual Salary equals `max_salary`, in table order
    pub highest_salary: Vec<usize>,
    /// Keyed and sorted by the Department cell itself, so a number and the
    /// text that displays like it stay separate groups
    pub by_department: BTreeMap<CellValue, DepartmentMeans>,
    /// Sorted by department, then ethnicity
    pub by_department_ethnicity: Vec<GroupStats>,
}

impl Summary {
    /// Compute the summary. Rows with an absent Department (or Ethnicity, for
    /// the pair grouping) belong to no group.
    pub fn from_table(table: &Table) -> EmployeeResult<Self> {
        let department = table.require_column(columns::DEPARTMENT)?;
        let ethnicity = table.require_column(columns::ETHNICITY)?;
        let age = table.require_column(columns::AGE)?;
        let salary = table.require_column(columns::ANNUAL_SALARY)?;

        let max_salary = stats::max(table.column(salary));
        let highest_salary = match max_salary {
            Some(max) => table
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row[salary].as_number() == Some(max))
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };

        let mut departments: BTreeMap<&CellValue, Vec<usize>> = BTreeMap::new();
        let mut pairs: BTreeMap<(&CellValue, &CellValue), Vec<usize>> = BTreeMap::new();
        for (i, row) in table.rows.iter().enumerate() {
            let dept = &row[department];
            if !dept.is_groupable() {
                continue;
            }
            let eth = &row[ethnicity];
            if eth.is_groupable() {
                pairs.entry((dept, eth)).or_default().push(i);
            }
            departments.entry(dept).or_default().push(i);
        }

        let by_department = departments
            .into_iter()
            .map(|(dept, rows)| {
                let means = DepartmentMeans {
                    age: stats::mean(cells(table, &rows, age)),
                    salary: stats::mean(cells(table, &rows, salary)),
                };
                (dept.clone(), means)
            })
            .collect();

        let by_department_ethnicity = pairs
            .into_iter()
            .map(|((department, ethnicity), rows)| GroupStats {
                department: department.clone(),
                ethnicity: ethnicity.clone(),
                age: Spread::of(&cells(table, &rows, age)),
                salary: Spread::of(&cells(table, &rows, salary)),
            })
            .collect();

        Ok(Self {
            max_salary,
            highest_salary,
            by_department,
            by_department_ethnicity,
        })
    }

    /// The highest-paid rows as their own table
    pub fn highest_salary_table(&self, table: &Table) -> Table {
        table.select_rows(&self.highest_salary)
    }

    /// One `{department, age, salary}` record per department, in key order
    fn department_records(&self) -> Vec<serde_json::Value> {
        self.by_department
            .iter()
            .map(|(department, means)| {
                serde_json::json!({
                    "department": department,
                    "age": means.age,
                    "salary": means.salary,
                })
            })
            .collect()
    }

    /// JSON document with the highest-paid rows expanded to records
    pub fn to_json(&self, table: &Table) -> EmployeeResult<serde_json::Value> {
        let records: Vec<BTreeMap<&str, &CellValue>> = self
            .highest_salary
            .iter()
            .filter_map(|&i| table.rows.get(i))
            .map(|row| {
                table
                    .headers
                    .iter()
                    .map(String::as_str)
                    .zip(row.iter())
                    .collect()
            })
            .collect();

        Ok(serde_json::json!({
            "max_salary": self.max_salary,
            "highest_salary": serde_json::to_value(records)?,
            "by_department": serde_json::to_value(self.department_records())?,
            "by_department_ethnicity": serde_json::to_value(&self.by_department_ethnicity)?,
        }))
    }
}

fn cells<'t>(table: &'t Table, rows: &[usize], col: usize) -> Vec<&'t CellValue> {
    rows.iter().map(|&i| &table.rows[i][col]).collect()
}
