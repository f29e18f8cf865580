//! Headline summary statistics.
//!
//! A single pass over the record table accumulating totals, the date span,
//! and per-state / per-buyer sums. Total function: empty input yields a
//! zeroed summary, never an error.

use tally_core::{SummaryStatistics, TransactionRecord};
use tracing::debug;

/// Compute summary statistics over a record table.
///
/// Records without a state (or buyer) still count toward the totals; they
/// just contribute to no group in the corresponding map.
pub fn summarize(records: &[TransactionRecord]) -> SummaryStatistics {
    let mut stats = SummaryStatistics::default();

    for record in records {
        stats.total_sales += record.value;
        stats.total_transactions += 1;

        if let Some(date) = record.date {
            stats.date_range.include(date);
        }
        if let Some(state) = &record.state {
            *stats.state_wise_sales.entry(state.clone()).or_insert(0.0) += record.value;
        }
        if let Some(buyer) = &record.clean_buyer {
            *stats.buyer_wise_sales.entry(buyer.clone()).or_insert(0.0) += record.value;
        }
    }

    if stats.total_transactions > 0 {
        stats.avg_transaction = stats.total_sales / stats.total_transactions as f64;
    }

    debug!(
        transactions = stats.total_transactions,
        total = stats.total_sales,
        "summary computed"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Datelike, NaiveDate};
    use tally_core::UNKNOWN_ITEM;

    fn make_record(
        value: f64,
        state: Option<&str>,
        buyer: Option<&str>,
        date: Option<NaiveDate>,
    ) -> TransactionRecord {
        TransactionRecord {
            date,
            raw_name: buyer.map(|b| b.to_string()),
            state: state.map(|s| s.to_string()),
            value,
            is_item: false,
            clean_buyer: buyer.map(|b| b.to_string()),
            item_name: UNKNOWN_ITEM.to_string(),
            year: date.map(|d| d.year()),
            month: date.map(|d| d.month()),
            month_name: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_input_yields_zeroed_summary() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_transactions, 0);
        assert_eq!(stats.total_sales, 0.0);
        assert_eq!(stats.avg_transaction, 0.0);
        assert_eq!(stats.date_range.start, None);
        assert_eq!(stats.date_range.end, None);
        assert!(stats.state_wise_sales.is_empty());
        assert!(stats.buyer_wise_sales.is_empty());
    }

    #[test]
    fn test_totals_and_average() {
        let records = vec![
            make_record(100.0, Some("MH"), Some("Acme"), None),
            make_record(200.0, Some("GJ"), Some("Sharma"), None),
            make_record(300.0, Some("MH"), Some("Acme"), None),
        ];
        let stats = summarize(&records);

        assert_eq!(stats.total_transactions, 3);
        assert_relative_eq!(stats.total_sales, 600.0);
        assert_relative_eq!(stats.avg_transaction, 200.0);
    }

    #[test]
    fn test_total_sales_equals_sum_of_values() {
        let records: Vec<_> = (1..=50)
            .map(|i| make_record(i as f64 * 3.25, Some("MH"), None, None))
            .collect();
        let stats = summarize(&records);
        let expected: f64 = records.iter().map(|r| r.value).sum();
        assert_relative_eq!(stats.total_sales, expected);
    }

    #[test]
    fn test_group_sums() {
        let records = vec![
            make_record(100.0, Some("MH"), Some("Acme"), None),
            make_record(50.0, Some("MH"), Some("Sharma"), None),
            make_record(25.0, Some("GJ"), Some("Acme"), None),
        ];
        let stats = summarize(&records);

        assert_relative_eq!(stats.state_wise_sales["MH"], 150.0);
        assert_relative_eq!(stats.state_wise_sales["GJ"], 25.0);
        assert_relative_eq!(stats.buyer_wise_sales["Acme"], 125.0);
        assert_relative_eq!(stats.buyer_wise_sales["Sharma"], 50.0);
    }

    #[test]
    fn test_absent_state_counts_toward_totals_only() {
        let records = vec![
            make_record(100.0, Some("MH"), None, None),
            make_record(40.0, None, None, None),
        ];
        let stats = summarize(&records);

        assert_relative_eq!(stats.total_sales, 140.0);
        assert_eq!(stats.state_wise_sales.len(), 1);

        let state_total: f64 = stats.state_wise_sales.values().sum();
        let with_state: f64 = records
            .iter()
            .filter(|r| r.state.is_some())
            .map(|r| r.value)
            .sum();
        assert_relative_eq!(state_total, with_state);
    }

    #[test]
    fn test_summary_of_ingested_export() {
        let pipeline = tally_ingestion::Pipeline::new(&tally_core::Config::default());
        let records = pipeline
            .process_reader(
                "Date,Particulars,State,Value\n\
                 2024-01-05,Acme Corp,MH,₹10000\n\
                 ,Hydraulic Pump,,5000\n\
                 ,Section Total,,0\n\
                 2024-02-11,Sharma Traders,GJ,7500\n"
                    .as_bytes(),
            )
            .unwrap();
        let stats = summarize(&records);

        assert_eq!(stats.total_transactions, 3);
        assert_relative_eq!(stats.total_sales, 22_500.0);
        assert_relative_eq!(stats.avg_transaction, 7_500.0);
        assert_eq!(stats.date_range.start, Some(date(2024, 1, 5)));
        assert_eq!(stats.date_range.end, Some(date(2024, 2, 11)));
        assert_relative_eq!(stats.state_wise_sales["MH"], 15_000.0);
        assert_relative_eq!(stats.state_wise_sales["GJ"], 7_500.0);
        assert_relative_eq!(stats.buyer_wise_sales["Acme Corp"], 15_000.0);
        assert_eq!(stats.top_state(), Some(("MH", 15_000.0)));
        assert_eq!(stats.top_buyer(), Some(("Acme Corp", 15_000.0)));
    }

    #[test]
    fn test_date_range_spans_dated_records() {
        let records = vec![
            make_record(1.0, None, None, Some(date(2024, 3, 1))),
            make_record(1.0, None, None, None),
            make_record(1.0, None, None, Some(date(2023, 11, 20))),
        ];
        let stats = summarize(&records);
        assert_eq!(stats.date_range.start, Some(date(2023, 11, 20)));
        assert_eq!(stats.date_range.end, Some(date(2024, 3, 1)));
    }
}
