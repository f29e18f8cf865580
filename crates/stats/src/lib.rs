//! Summary statistics and reporting over clean transaction records.
//!
//! This crate handles:
//! - Headline summary statistics (totals, averages, date span, group sums)
//! - Reporting breakdowns (monthly trend, top buyers, product sales)
//! - Record filtering and delimited export

pub mod breakdown;
pub mod export;
pub mod summary;

pub use breakdown::{
    buyer_breakdown, monthly_sales, product_sales, top_n_share, BuyerBreakdown, MonthlySales,
};
pub use export::{write_csv, RecordFilter};
pub use summary::summarize;
