//! Raw table reading from delimited exports.
//!
//! Produces a [`RawTable`] of untyped string cells. Everything here is
//! all-or-nothing: a stream that cannot be read as a table at all fails,
//! while cell-level oddities are left for the pipeline to resolve.

use std::io::Read;

use tally_core::config::ReaderConfig;
use tally_core::{Error, RawTable, Result};

/// Read a delimited byte stream into a raw table.
///
/// The first row is taken as the header row and is mandatory. Data rows
/// shorter than the header are padded with empty cells; longer rows are
/// truncated. Undecodable input or a missing header row is a format error.
pub fn read_table<R: Read>(input: R, config: &ReaderConfig) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(Error::format("input has no usable header row"));
    }

    let width = headers.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().take(width).map(|c| c.to_string()).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(RawTable::new(headers, rows))
}
