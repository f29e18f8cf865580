//! Ledger ingestion and normalization for the tally-sales system.
//!
//! This crate handles:
//! - Reading raw delimited exports into tables
//! - Header normalization and synonym mapping
//! - Date/value coercion and forward-fill of carried values
//! - Buyer-vs-item row classification
//! - Row filtering and calendar derivation

pub mod classifier;
pub mod coerce;
pub mod columns;
pub mod fill;
pub mod pipeline;
pub mod reader;

pub use classifier::ItemClassifier;
pub use columns::{ColumnKey, ColumnMap};
pub use pipeline::Pipeline;
pub use reader::read_table;
