//! Cell-level type coercion.
//!
//! Accounting exports carry blank cells, merged-cell remnants, and
//! currency-formatted text. Coercion never fails a row on its own: a cell
//! that cannot be parsed becomes absent and is handled by the forward-fill
//! and filtering stages.

use chrono::{NaiveDate, NaiveDateTime};

/// Date shapes seen in ledger exports, day-first before month-first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d-%b-%Y", "%d-%b-%y"];

/// Datetime shapes; the time part is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Currency symbols stripped from value cells.
const CURRENCY_SYMBOLS: &[char] = &['₹', '$'];

/// Parse a date cell. Unparsable text is absent, not an error.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(dt.date());
        }
    }
    None
}

/// Parse a value cell, stripping currency symbols, thousands separators,
/// and whitespace. Unparsable text is absent, not an error.
pub fn parse_value(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
