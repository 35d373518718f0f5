//! Excel import/export for employee tables
//!
//! - Import: first worksheet of an .xlsx file → `Table`
//! - Export: `Table` → single-sheet .xlsx file

mod exporter;
mod importer;

pub use exporter::{EmployeeExporter, SHEET_NAME};
pub use importer::EmployeeImporter;
