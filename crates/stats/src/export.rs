//! Record filtering and delimited export.
//!
//! The downstream table view filters by state/buyer equality and offers
//! the filtered subset as a delimited download; both operate on the
//! already-built record table without re-running ingestion.

use std::io::Write;

use tally_core::{Result, TransactionRecord};

/// Equality filters over the record table. `None` means no constraint.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Keep only records with this exact state.
    pub state: Option<String>,
    /// Keep only records with this exact clean buyer.
    pub buyer: Option<String>,
}

impl RecordFilter {
    /// True if `record` passes every set constraint.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if let Some(state) = &self.state {
            if record.state.as_deref() != Some(state.as_str()) {
                return false;
            }
        }
        if let Some(buyer) = &self.buyer {
            if record.clean_buyer.as_deref() != Some(buyer.as_str()) {
                return false;
            }
        }
        true
    }

    /// Filtered view of the table, original order preserved.
    pub fn apply<'a>(&self, records: &'a [TransactionRecord]) -> Vec<&'a TransactionRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Columns written by [`write_csv`], in order.
const EXPORT_HEADERS: &[&str] = &["date", "clean_buyer", "state", "item_name", "value"];

/// Write records as delimited text with the display columns.
///
/// Absent fields are written as empty cells.
pub fn write_csv<'a, W, I>(records: I, out: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_HEADERS)?;

    for record in records {
        writer.write_record(&[
            record
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            record.clean_buyer.clone().unwrap_or_default(),
            record.state.clone().unwrap_or_default(),
            record.item_name.clone(),
            record.value.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::UNKNOWN_ITEM;

    fn make_record(buyer: &str, state: &str, value: f64) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 5),
            raw_name: Some(buyer.to_string()),
            state: Some(state.to_string()),
            value,
            is_item: false,
            clean_buyer: Some(buyer.to_string()),
            item_name: UNKNOWN_ITEM.to_string(),
            year: Some(2024),
            month: Some(1),
            month_name: Some("January".to_string()),
        }
    }

    #[test]
    fn test_filter_by_state() {
        let records = vec![
            make_record("Acme", "MH", 100.0),
            make_record("Sharma", "GJ", 200.0),
            make_record("Bulk", "MH", 300.0),
        ];
        let filter = RecordFilter {
            state: Some("MH".to_string()),
            buyer: None,
        };
        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].clean_buyer.as_deref(), Some("Acme"));
        assert_eq!(filtered[1].clean_buyer.as_deref(), Some("Bulk"));
    }

    #[test]
    fn test_filter_by_state_and_buyer() {
        let records = vec![
            make_record("Acme", "MH", 100.0),
            make_record("Acme", "GJ", 200.0),
            make_record("Sharma", "MH", 300.0),
        ];
        let filter = RecordFilter {
            state: Some("MH".to_string()),
            buyer: Some("Acme".to_string()),
        };
        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, 100.0);
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let records = vec![
            make_record("Acme", "MH", 100.0),
            make_record("Sharma", "GJ", 200.0),
        ];
        assert_eq!(RecordFilter::default().apply(&records).len(), 2);
    }

    #[test]
    fn test_filter_never_matches_absent_field() {
        let mut record = make_record("Acme", "MH", 100.0);
        record.state = None;
        let filter = RecordFilter {
            state: Some("MH".to_string()),
            buyer: None,
        };
        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_write_csv() {
        let records = vec![make_record("Acme", "MH", 1500.5)];
        let mut out = Vec::new();
        write_csv(records.iter(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("date,clean_buyer,state,item_name,value"));
        assert_eq!(lines.next(), Some("2024-01-05,Acme,MH,Unknown,1500.5"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_csv_absent_fields_are_empty_cells() {
        let mut record = make_record("Acme", "MH", 100.0);
        record.date = None;
        record.state = None;
        record.clean_buyer = None;

        let mut out = Vec::new();
        write_csv([&record], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1), Some(",,,Unknown,100"));
    }
}
