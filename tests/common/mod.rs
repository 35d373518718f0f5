//! Shared fixtures: small employee workbooks written with rust_xlsxwriter

#![allow(dead_code)] // not every test binary uses every fixture

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::Path;

pub const HEADERS: [&str; 13] = [
    "EEID",
    "Full Name",
    "Job Title",
    "Department",
    "Gender",
    "Ethnicity",
    "Age",
    "Hire Date",
    "Annual Salary",
    "Bonus %",
    "Country",
    "City",
    "Exit Date",
];

/// One fixture cell
pub enum Cell {
    Text(&'static str),
    Number(f64),
    /// Written as a real Excel date (yyyy-mm-dd number format)
    Date(u16, u8, u8),
    Blank,
}

use Cell::{Blank, Date, Number, Text};

/// Seven rows: one exact duplicate, plus missing values in most columns
pub fn employee_rows() -> Vec<[Cell; 13]> {
    vec![
        [
            Text("E001"), Text("Emily Davis"), Text("Sr. Manger"), Text("IT"), Text("Female"),
            Text("Black"), Number(55.0), Date(2016, 4, 8), Number(141604.0), Number(0.15),
            Text("United States"), Text("Seattle"), Date(2021, 10, 16),
        ],
        [
            Text("E002"), Text("Chloe Rivera"), Text("Technical Architect"), Text("IT"), Text("female"),
            Text("Caucasian"), Number(30.0), Text("2015-03-12"), Number(99975.0), Blank,
            Text("United States"), Text("Seattle"), Blank,
        ],
        [
            Text("E003"), Blank, Blank, Text("IT"), Text("Male"),
            Blank, Number(50.0), Date(2005, 9, 1), Blank, Number(0.05),
            Text("China"), Blank, Blank,
        ],
        [
            Text("E004"), Text("Luis Soto"), Text("Analyst"), Text("Finance"), Blank,
            Blank, Blank, Blank, Number(60000.0), Number(0.1),
            Text("Brazil"), Text(" "), Blank,
        ],
        [
            Text("E005"), Text("Sam Park"), Text("Analyst"), Blank, Text("Male"),
            Text("Caucasian"), Number(41.0), Date(2019, 1, 15), Blank, Number(0.2),
            Text("United States"), Blank, Blank,
        ],
        [
            Text("E006"), Text("Mia Chen"), Text("Technical Architect"), Text("IT"), Text("Female"),
            Text("Asian"), Number(45.0), Date(2011, 7, 1), Number(250000.0), Number(0.3),
            Blank, Text("Chongqing"), Blank,
        ],
        // exact duplicate of E002
        [
            Text("E002"), Text("Chloe Rivera"), Text("Technical Architect"), Text("IT"), Text("female"),
            Text("Caucasian"), Number(30.0), Text("2015-03-12"), Number(99975.0), Blank,
            Text("United States"), Text("Seattle"), Blank,
        ],
    ]
}

/// Write `HEADERS` plus `rows` to a one-sheet workbook
pub fn write_workbook(path: &Path, rows: &[[Cell; 13]]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Text(s) => {
                    worksheet.write_string(r, c, *s).unwrap();
                }
                Number(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                Date(y, m, d) => {
                    let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                    worksheet
                        .write_datetime_with_format(r, c, &date, &date_format)
                        .unwrap();
                }
                Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

pub fn write_employee_workbook(path: &Path) {
    write_workbook(path, &employee_rows());
}
