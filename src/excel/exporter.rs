//! Excel exporter implementation - Table → Excel (.xlsx)

use crate::error::{EmployeeError, EmployeeResult};
use crate::types::{CellValue, Table};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Name of the single worksheet written
pub const SHEET_NAME: &str = "Employees";

/// Writes a table as one worksheet: header row, then data rows, no index column
pub struct EmployeeExporter<'a> {
    table: &'a Table,
    header_format: Format,
    date_format: Format,
}

impl<'a> EmployeeExporter<'a> {
    /// Create a new Excel exporter
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            header_format: Format::new().set_bold(),
            date_format: Format::new().set_num_format("yyyy-mm-dd"),
        }
    }

    /// Export the table to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> EmployeeResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| EmployeeError::File(format!("Failed to set worksheet name: {}", e)))?;

        for (col_idx, name) in self.table.headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col_idx as u16, name, &self.header_format)
                .map_err(|e| EmployeeError::File(format!("Failed to write header: {}", e)))?;
        }

        for (row_idx, row) in self.table.rows.iter().enumerate() {
            // +1 for the header row
            let excel_row = (row_idx + 1) as u32;
            for (col_idx, value) in row.iter().enumerate() {
                self.write_cell_value(worksheet, excel_row, col_idx as u16, value)?;
            }
        }

        workbook.save(output_path).map_err(|e| {
            EmployeeError::File(format!(
                "Failed to save Excel file '{}': {}",
                output_path.display(),
                e
            ))
        })?;

        debug!(
            "Wrote {} row(s) to {}",
            self.table.row_count(),
            output_path.display()
        );
        Ok(())
    }

    /// Write a single cell value based on its type; absent cells stay blank
    fn write_cell_value(
        &self,
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        value: &CellValue,
    ) -> EmployeeResult<()> {
        let result = match value {
            CellValue::Empty => return Ok(()),
            CellValue::Number(n) if !n.is_finite() => return Ok(()),
            CellValue::Number(n) => worksheet.write_number(row, col, *n).map(|_| ()),
            CellValue::Text(s) => worksheet.write_string(row, col, s).map(|_| ()),
            CellValue::Bool(b) => worksheet.write_boolean(row, col, *b).map(|_| ()),
            CellValue::Date(d) => match excel_date(*d) {
                Some(dt) => worksheet
                    .write_datetime_with_format(row, col, &dt, &self.date_format)
                    .map(|_| ()),
                // Outside Excel's date range: keep the ISO text
                None => worksheet
                    .write_string(row, col, d.format("%Y-%m-%d").to_string())
                    .map(|_| ()),
            },
        };
        result.map_err(|e| EmployeeError::File(format!("Failed to write cell: {}", e)))
    }
}

fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year()).ok()?;
    if !(1900..=9999).contains(&year) {
        return None;
    }
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}
