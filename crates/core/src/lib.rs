//! Core types and configuration for the tally-sales system.
//!
//! This crate provides shared types used across all other crates:
//! - Ledger data types (raw tables, transaction records, summaries)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
