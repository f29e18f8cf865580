//! Header normalization and canonical column resolution.
//!
//! Export headers are free text ("  Buyer  ", "VALUE", "Particulars");
//! column presence, not position, is what matters. Headers are normalized
//! (trim, casefold, internal whitespace to `_`), then mapped through the
//! synonym table onto canonical keys.

use tally_core::{Error, Result};

/// Canonical identity of a column after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    /// Invoice date.
    Date,
    /// Buyer/item name ("Particulars" or "Buyer" in the export).
    BuyerName,
    /// Buyer's state.
    State,
    /// Invoice amount ("Value" or "Amount" in the export).
    Value,
    /// Anything else, kept in normalized form and ignored downstream.
    Other(String),
}

impl ColumnKey {
    /// Resolve a raw header to its canonical key.
    pub fn from_header(raw: &str) -> ColumnKey {
        let normalized = normalize_header(raw);
        match normalized.as_str() {
            "date" => ColumnKey::Date,
            "particulars" | "buyer" | "buyer_name" => ColumnKey::BuyerName,
            "state" => ColumnKey::State,
            "value" | "amount" => ColumnKey::Value,
            _ => ColumnKey::Other(normalized),
        }
    }
}

/// Normalize a raw header: trim, lowercase, collapse internal whitespace
/// runs to a single `_`.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Canonical column key -> column index, resolved once per table.
///
/// When two headers normalize to the same canonical key the later column
/// wins, mirroring a rename step rather than a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    /// Index of the date column, if present.
    pub date: Option<usize>,
    /// Index of the buyer/item name column, if present.
    pub buyer_name: Option<usize>,
    /// Index of the state column, if present.
    pub state: Option<usize>,
    /// Index of the value column, if present.
    pub value: Option<usize>,
}

impl ColumnMap {
    /// Resolve headers into a column map.
    pub fn from_headers(headers: &[String]) -> ColumnMap {
        let mut map = ColumnMap::default();
        for (idx, header) in headers.iter().enumerate() {
            match ColumnKey::from_header(header) {
                ColumnKey::Date => map.date = Some(idx),
                ColumnKey::BuyerName => map.buyer_name = Some(idx),
                ColumnKey::State => map.state = Some(idx),
                ColumnKey::Value => map.value = Some(idx),
                ColumnKey::Other(_) => {}
            }
        }
        map
    }

    /// Index of the mandatory value column.
    ///
    /// Without an amount column no row can be validated, so its absence is
    /// a format error rather than a degraded field.
    pub fn require_value(&self) -> Result<usize> {
        self.value
            .ok_or_else(|| Error::format("no value/amount column found in header row"))
    }
}
