//! Date and number coercion for typed columns, plus fractional year offsets

use crate::error::{EmployeeError, EmployeeResult};
use crate::types::CellValue;
use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime};

/// Text layouts accepted for dates, tried in order
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Average days per year, used for the fractional part of a year offset
const DAYS_PER_YEAR: f64 = 365.25;

/// Parse a date written as text
pub fn parse_date(text: &str) -> EmployeeResult<NaiveDate> {
    let text = text.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.date_naive());
    }

    Err(EmployeeError::Parse(format!("Invalid date '{}'", text)))
}

/// Parse a number written as text
pub fn parse_number(text: &str) -> EmployeeResult<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| EmployeeError::Parse(format!("Invalid number '{}'", text)))?;
    if value.is_nan() {
        return Err(EmployeeError::Parse(format!("Invalid number '{}'", text)));
    }
    Ok(value)
}

/// Convert an Excel serial day number (1900 date system) to a date
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    // Serial 60 is the phantom 1900-02-29; counting from 1899-12-30 lines up for 61+.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = if serial < 60.0 { serial + 1.0 } else { serial };
    epoch.checked_add_days(Days::new(days.trunc() as u64))
}

/// Coerce a cell to a date; anything unparseable becomes absent
pub fn coerce_date(value: &CellValue) -> CellValue {
    let date = match value {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_date(s).ok(),
        CellValue::Number(n) => excel_serial_to_date(*n),
        CellValue::Empty | CellValue::Bool(_) => None,
    };
    CellValue::from(date)
}

/// Coerce a cell to a number; anything unparseable becomes absent
pub fn coerce_number(value: &CellValue) -> CellValue {
    let number = match value {
        CellValue::Number(n) if !n.is_nan() => Some(*n),
        CellValue::Text(s) => parse_number(s).ok(),
        _ => None,
    };
    CellValue::from(number)
}

/// Shift a date by a possibly fractional number of years.
///
/// Whole years move by calendar months (Feb 29 clamps to Feb 28); the
/// fractional remainder is converted with 365.25 days per year and rounded
/// to the nearest day. Negative offsets move backwards the same way.
pub fn add_years(date: NaiveDate, years: f64) -> Option<NaiveDate> {
    if !years.is_finite() {
        return None;
    }

    let whole = years.trunc();
    let remainder_days = ((years - whole) * DAYS_PER_YEAR).round();
    let months = Months::new((whole.abs() as u32).checked_mul(12)?);

    let shifted = if whole >= 0.0 {
        date.checked_add_months(months)?
    } else {
        date.checked_sub_months(months)?
    };

    let days = Days::new(remainder_days.abs() as u64);
    if remainder_days >= 0.0 {
        shifted.checked_add_days(days)
    } else {
        shifted.checked_sub_days(days)
    }
}
