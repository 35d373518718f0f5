//! Excel importer implementation - Excel (.xlsx) → Table

use crate::core::dates::{excel_serial_to_date, parse_date};
use crate::error::{EmployeeError, EmployeeResult};
use crate::types::{CellValue, Table};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the first worksheet of a workbook into a `Table`
pub struct EmployeeImporter {
    path: PathBuf,
}

impl EmployeeImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the first worksheet; row 0 is the header row
    pub fn import(&self) -> EmployeeResult<Table> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            EmployeeError::File(format!(
                "Failed to open Excel file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_name = workbook.sheet_names().first().cloned().ok_or_else(|| {
            EmployeeError::File(format!("'{}' has no worksheets", self.path.display()))
        })?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            EmployeeError::File(format!("Failed to read sheet '{}': {}", sheet_name, e))
        })?;

        let table = self.read_table(&range)?;
        debug!(
            "Imported sheet '{}': {} rows x {} columns",
            sheet_name,
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    fn read_table(&self, range: &Range<Data>) -> EmployeeResult<Table> {
        let mut rows = range.rows();

        let header = rows.next().ok_or_else(|| {
            EmployeeError::File(format!("'{}' has no header row", self.path.display()))
        })?;
        let headers = header
            .iter()
            .enumerate()
            .map(|(col, cell)| self.header_name(col, cell))
            .collect();

        let mut table = Table::new(headers);
        for row in rows {
            table.push_row(row.iter().map(Self::convert_cell).collect());
        }
        Ok(table)
    }

    fn header_name(&self, col: usize, cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => f.to_string(),
            _ => format!("col_{}", col),
        }
    }

    /// Convert one calamine cell to a `CellValue`
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::from(excel_serial_to_date(dt.as_f64())),
            Data::DateTimeIso(s) => parse_date(s)
                .map(CellValue::Date)
                .unwrap_or_else(|_| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}
