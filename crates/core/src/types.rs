//! Core data types for the tally-sales system.

use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Monetary amount in the ledger's currency.
pub type Money = f64;

/// Item name assigned to rows that are not product lines.
pub const UNKNOWN_ITEM: &str = "Unknown";

/// Raw tabular input as read from an export, before any normalization.
///
/// Headers keep the export's original wording; cells are untyped text.
/// Rows are padded or truncated to the header width by the reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Original column headers, in file order.
    pub headers: Vec<String>,
    /// Data rows, each the same length as `headers`.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a raw table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (excludes the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One retained transaction after ingestion.
///
/// `value` is always strictly positive; rows without a usable amount never
/// make it into the record table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Invoice date, carried forward from the most recent dated row.
    pub date: Option<NaiveDate>,
    /// Original buyer/item text from the name column, carried forward.
    pub raw_name: Option<String>,
    /// Buyer's state, carried forward like `date`.
    pub state: Option<String>,
    /// Invoice amount.
    pub value: Money,
    /// True if `raw_name` matched the configured item keyword set.
    pub is_item: bool,
    /// Most recent non-item `raw_name`, carried across item rows.
    pub clean_buyer: Option<String>,
    /// `raw_name` for item rows, `UNKNOWN_ITEM` otherwise.
    pub item_name: String,
    /// Calendar year of `date`.
    pub year: Option<i32>,
    /// Calendar month of `date` (1-12).
    pub month: Option<u32>,
    /// English month name of `date`.
    pub month_name: Option<String>,
}

impl TransactionRecord {
    /// True if this record carries a recognized product name.
    pub fn has_known_item(&self) -> bool {
        self.item_name != UNKNOWN_ITEM
    }

    /// Year and month as a sortable pair, when the date is known.
    pub fn year_month(&self) -> Option<(i32, u32)> {
        match (self.year, self.month) {
            (Some(y), Some(m)) => Some((y, m)),
            _ => None,
        }
    }
}

/// Span of invoice dates seen in the record table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest date, if any record carried one.
    pub start: Option<NaiveDate>,
    /// Latest date, if any record carried one.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Widen the range to include `date`.
    pub fn include(&mut self, date: NaiveDate) {
        match self.start {
            Some(start) if start <= date => {}
            _ => self.start = Some(date),
        }
        match self.end {
            Some(end) if end >= date => {}
            _ => self.end = Some(date),
        }
    }
}

/// Summary statistics over a record table.
///
/// Recomputed from scratch whenever the table is replaced; never mutated
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Sum of `value` over all records.
    pub total_sales: Money,
    /// Number of records.
    pub total_transactions: usize,
    /// Mean of `value` (0 when there are no records).
    pub avg_transaction: Money,
    /// Min/max of `date` over dated records.
    pub date_range: DateRange,
    /// Summed value per state, states absent on every record omitted.
    pub state_wise_sales: BTreeMap<String, Money>,
    /// Summed value per clean buyer, likewise omitted when absent.
    pub buyer_wise_sales: BTreeMap<String, Money>,
}

impl SummaryStatistics {
    /// State with the largest summed value.
    pub fn top_state(&self) -> Option<(&str, Money)> {
        self.state_wise_sales
            .iter()
            .max_by_key(|(_, &v)| OrderedFloat(v))
            .map(|(s, &v)| (s.as_str(), v))
    }

    /// Buyer with the largest summed value.
    pub fn top_buyer(&self) -> Option<(&str, Money)> {
        self.buyer_wise_sales
            .iter()
            .max_by_key(|(_, &v)| OrderedFloat(v))
            .map(|(b, &v)| (b.as_str(), v))
    }
}
