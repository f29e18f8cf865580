//! Reporting breakdowns over the record table.
//!
//! Group-by series behind the downstream report views: monthly sales
//! trend, top buyers with concentration, and per-product sales. All total
//! functions over an immutable slice.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use tally_core::{Money, TransactionRecord};

/// Sales total and transaction count for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySales {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub total: Money,
    pub transactions: usize,
}

/// Per-month sales series in chronological order.
///
/// Records without a resolved date are skipped; they have no month to
/// land in.
pub fn monthly_sales(records: &[TransactionRecord]) -> Vec<MonthlySales> {
    let mut months: BTreeMap<(i32, u32), (Money, usize)> = BTreeMap::new();
    for record in records {
        if let Some(key) = record.year_month() {
            let entry = months.entry(key).or_insert((0.0, 0));
            entry.0 += record.value;
            entry.1 += 1;
        }
    }
    months
        .into_iter()
        .map(|((year, month), (total, transactions))| MonthlySales {
            year,
            month,
            total,
            transactions,
        })
        .collect()
}

/// Per-buyer sales rollup.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyerBreakdown {
    pub buyer: String,
    pub total: Money,
    pub transactions: usize,
    pub avg_value: Money,
}

/// Per-buyer totals, counts, and averages, sorted by total descending.
pub fn buyer_breakdown(records: &[TransactionRecord]) -> Vec<BuyerBreakdown> {
    let mut buyers: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
    for record in records {
        if let Some(buyer) = record.clean_buyer.as_deref() {
            let entry = buyers.entry(buyer).or_insert((0.0, 0));
            entry.0 += record.value;
            entry.1 += 1;
        }
    }

    let mut breakdown: Vec<BuyerBreakdown> = buyers
        .into_iter()
        .map(|(buyer, (total, transactions))| BuyerBreakdown {
            buyer: buyer.to_string(),
            total,
            transactions,
            avg_value: total / transactions as f64,
        })
        .collect();
    breakdown.sort_by_key(|b| std::cmp::Reverse(OrderedFloat(b.total)));
    breakdown
}

/// Share of total sales held by the top `n` buyers, in [0, 1].
///
/// Expects the output of [`buyer_breakdown`] (already sorted descending).
/// Zero when there are no sales.
pub fn top_n_share(breakdown: &[BuyerBreakdown], n: usize, total_sales: Money) -> f64 {
    if total_sales <= 0.0 {
        return 0.0;
    }
    let top: Money = breakdown.iter().take(n).map(|b| b.total).sum();
    top / total_sales
}

/// Per-product sales over records with a recognized item, sorted by total
/// descending.
pub fn product_sales(records: &[TransactionRecord]) -> Vec<(String, Money)> {
    let mut products: BTreeMap<&str, Money> = BTreeMap::new();
    for record in records {
        if record.has_known_item() {
            *products.entry(record.item_name.as_str()).or_insert(0.0) += record.value;
        }
    }

    let mut sales: Vec<(String, Money)> = products
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    sales.sort_by_key(|(_, total)| std::cmp::Reverse(OrderedFloat(*total)));
    sales
}
