//! The ingestion pipeline: raw table in, clean transaction records out.
//!
//! Stages run in a fixed order over the whole row set: header resolution,
//! date coercion + forward-fill, buyer/state forward-fill, value coercion,
//! row classification, filtering, calendar derivation. Later stages depend
//! on earlier ones; row order is preserved throughout because forward-fill
//! is order-dependent.

use std::io::Read;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use tally_core::config::ReaderConfig;
use tally_core::{Config, RawTable, Result, TransactionRecord, UNKNOWN_ITEM};

use crate::classifier::ItemClassifier;
use crate::coerce::{parse_date, parse_value};
use crate::columns::ColumnMap;
use crate::fill::forward_fill;
use crate::reader::read_table;

/// The ingestion pipeline, configured once and reusable across uploads.
///
/// Holds no per-upload state: each [`process`](Pipeline::process) call
/// takes an immutable table and returns freshly built records.
pub struct Pipeline {
    reader: ReaderConfig,
    classifier: ItemClassifier,
}

impl Pipeline {
    /// Create a pipeline from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            reader: config.reader.clone(),
            classifier: ItemClassifier::from_config(&config.classifier),
        }
    }

    /// Read a delimited byte stream and process it in one call.
    pub fn process_reader<R: Read>(&self, input: R) -> Result<Vec<TransactionRecord>> {
        let table = read_table(input, &self.reader)?;
        self.process(&table)
    }

    /// Turn a raw table into clean transaction records.
    ///
    /// Fails only at the boundary: a table without a value/amount column
    /// is a format error; everything cell-level degrades to absent. An
    /// empty table yields an empty record list.
    pub fn process(&self, table: &RawTable) -> Result<Vec<TransactionRecord>> {
        let map = ColumnMap::from_headers(&table.headers);
        let value_idx = map.require_value()?;
        let row_count = table.row_count();

        // Dates: coerce, then carry forward across undated rows.
        let mut dates: Vec<Option<NaiveDate>> = match map.date {
            Some(idx) => table.rows.iter().map(|row| parse_date(&row[idx])).collect(),
            None => vec![None; row_count],
        };
        forward_fill(&mut dates);

        // Names and states carry forward the same way. The carried name is
        // pre-classification: an item row inherits the text of the row
        // above it only when its own name cell is blank.
        let mut names = text_cells(table, map.buyer_name);
        forward_fill(&mut names);
        let mut states = text_cells(table, map.state);
        forward_fill(&mut states);

        let values: Vec<Option<f64>> = table
            .rows
            .iter()
            .map(|row| parse_value(&row[value_idx]))
            .collect();

        // Classify each row, then re-run the fill over a masked sequence
        // where item rows are absent: clean_buyer is the nearest preceding
        // non-item name.
        let is_item: Vec<bool> = names
            .iter()
            .map(|name| name.as_deref().is_some_and(|n| self.classifier.is_item(n)))
            .collect();
        let mut clean_buyers: Vec<Option<String>> = names
            .iter()
            .zip(&is_item)
            .map(|(name, &item)| if item { None } else { name.clone() })
            .collect();
        forward_fill(&mut clean_buyers);

        let mut records = Vec::with_capacity(row_count);
        let mut dropped = 0usize;
        for row in 0..row_count {
            // Header/section rows carried into the export have no real
            // transaction amount.
            let value = match values[row] {
                Some(v) if v > 0.0 => v,
                _ => {
                    dropped += 1;
                    debug!(row, "dropping row without a positive value");
                    continue;
                }
            };

            let date = dates[row];
            let raw_name = names[row].clone();
            let item = is_item[row];
            let item_name = match (&raw_name, item) {
                (Some(name), true) => name.clone(),
                _ => UNKNOWN_ITEM.to_string(),
            };

            records.push(TransactionRecord {
                date,
                raw_name,
                state: states[row].clone(),
                value,
                is_item: item,
                clean_buyer: clean_buyers[row].clone(),
                item_name,
                year: date.map(|d| d.year()),
                month: date.map(|d| d.month()),
                month_name: date.map(|d| d.format("%B").to_string()),
            });
        }

        info!(
            rows_in = row_count,
            records_out = records.len(),
            dropped,
            "ingest complete"
        );
        Ok(records)
    }
}

/// Extract a text column as trimmed optional cells; blank cells are absent.
fn text_cells(table: &RawTable, idx: Option<usize>) -> Vec<Option<String>> {
    match idx {
        Some(idx) => table
            .rows
            .iter()
            .map(|row| {
                let cell = row[idx].trim();
                if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect(),
        None => vec![None; table.row_count()],
    }
}
