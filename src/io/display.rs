//! Human-readable rendering of store contents

use crate::core::TransactionStore;
use crate::types::{Field, TransactionRecord};
use std::io::{self, Write};

/// Write one record as a labelled block
pub fn write_record(out: &mut dyn Write, index: usize, record: &TransactionRecord) -> io::Result<()> {
    writeln!(out, "===== Transaction {} =====", index)?;
    writeln!(out, "ID: {}", record.transaction_id)?;
    writeln!(out, "Timestamp: {}", record.timestamp)?;
    writeln!(out, "Sender: {}", record.sender_account)?;
    writeln!(out, "Receiver: {}", record.receiver_account)?;
    writeln!(out, "Amount: {:.2}", record.amount)?;
    writeln!(out, "Type: {}", record.transaction_type)?;
    writeln!(out, "Merchant: {}", record.merchant_category)?;
    writeln!(out, "Location: {}", record.location)?;
    writeln!(out, "Device: {}", record.device_used)?;
    writeln!(out, "Is Fraud: {}", record.is_fraud)?;
    writeln!(out, "Fraud Type: {}", record.fraud_type)?;
    writeln!(out, "Time Since Last: {}", record.time_since_last_transaction)?;
    writeln!(out, "Spending Deviation: {}", record.spending_deviation_score)?;
    writeln!(out, "Velocity: {}", record.velocity_score)?;
    writeln!(out, "Geo Anomaly: {}", record.geo_anomaly_score)?;
    writeln!(out, "Payment Channel: {}", record.payment_channel)?;
    writeln!(out, "IP: {}", record.ip_address)?;
    writeln!(out, "Device Hash: {}", record.device_hash)?;
    writeln!(out)
}

/// Write the short summary block used when listing search matches
pub fn write_match(out: &mut dyn Write, index: usize, record: &TransactionRecord) -> io::Result<()> {
    writeln!(out, "===== Match {} =====", index)?;
    writeln!(out, "ID: {}", record.transaction_id)?;
    writeln!(out, "Date: {}", record.timestamp)?;
    writeln!(out, "Amount: {:.2}", record.amount)?;
    writeln!(out, "Location: {}", record.location)?;
    writeln!(out, "Payment Channel: {}", record.payment_channel)?;
    writeln!(out)
}

/// List up to `limit` records matching `query` on `field`
///
/// Returns the number of records listed.
pub fn list_matches(
    store: &dyn TransactionStore,
    query: &str,
    field: Field,
    limit: usize,
    out: &mut dyn Write,
) -> io::Result<usize> {
    let matches = store.find_matches(query, field);
    for (index, record) in matches.iter().take(limit).enumerate() {
        write_match(out, index + 1, record)?;
    }

    let listed = matches.len().min(limit);
    if listed < matches.len() {
        writeln!(out, "Listing {} of {} matches.", listed, matches.len())?;
    }
    Ok(listed)
}

/// Display up to `limit` records of a store, all of them when `limit` is `None`
///
/// Returns the number of records displayed.
pub fn display(store: &dyn TransactionStore, limit: Option<usize>, out: &mut dyn Write) -> io::Result<usize> {
    if store.is_empty() {
        writeln!(out, "No transactions to display.")?;
        return Ok(0);
    }

    let limit = limit.unwrap_or(usize::MAX);
    let mut displayed = 0;
    for record in store.iter().take(limit) {
        displayed += 1;
        write_record(out, displayed, record)?;
    }

    if displayed < store.len() {
        writeln!(
            out,
            "Displaying {} of {} transactions.",
            displayed,
            store.len()
        )?;
    }

    Ok(displayed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{create_store, StoreKind};
    use crate::types::transaction::fixtures::record;
    use rstest::rstest;

    fn store_with(kind: StoreKind, count: usize) -> Box<dyn TransactionStore> {
        let mut store = create_store(kind);
        for i in 1..=count {
            store.insert(record(&format!("T{}", i), "deposit", "Tokyo", "False"));
        }
        store
    }

    #[rstest]
    #[case::limited(12, Some(10), 10, true)]
    #[case::all(12, None, 12, false)]
    #[case::limit_above_count(3, Some(10), 3, false)]
    #[case::zero_limit(3, Some(0), 0, true)]
    fn test_display_limit(
        #[case] count: usize,
        #[case] limit: Option<usize>,
        #[case] expected: usize,
        #[case] truncated: bool,
        #[values(StoreKind::Linked, StoreKind::Array)] kind: StoreKind,
    ) {
        let store = store_with(kind, count);
        let mut out = Vec::new();

        let displayed = display(store.as_ref(), limit, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(displayed, expected);
        assert_eq!(text.matches("===== Transaction").count(), expected);
        assert_eq!(
            text.contains(&format!("Displaying {} of {} transactions.", expected, count)),
            truncated
        );
    }

    #[rstest]
    fn test_display_empty_store(#[values(StoreKind::Linked, StoreKind::Array)] kind: StoreKind) {
        let store = create_store(kind);
        let mut out = Vec::new();

        assert_eq!(display(store.as_ref(), Some(10), &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No transactions to display.\n");
    }

    #[rstest]
    #[case::all_listed(3, 10, 3, false)]
    #[case::truncated(12, 10, 10, true)]
    #[case::none(0, 10, 0, false)]
    fn test_list_matches(
        #[case] matching: usize,
        #[case] limit: usize,
        #[case] expected: usize,
        #[case] truncated: bool,
        #[values(StoreKind::Linked, StoreKind::Array)] kind: StoreKind,
    ) {
        let mut store = store_with(kind, matching);
        store.insert(record("X1", "withdrawal", "Berlin", "False"));
        let mut out = Vec::new();

        let listed =
            list_matches(store.as_ref(), "deposit", Field::TransactionType, limit, &mut out)
                .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(listed, expected);
        assert_eq!(text.matches("===== Match").count(), expected);
        assert!(!text.contains("ID: X1"));
        assert_eq!(
            text.contains(&format!("Listing {} of {} matches.", expected, matching)),
            truncated
        );
    }

    #[test]
    fn test_write_match_fields() {
        let mut out = Vec::new();
        write_match(&mut out, 2, &record("T42", "payment", "Dubai", "True")).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "===== Match 2 =====\nID: T42\nDate: 2023-08-22T09:22:43.516168\nAmount: 343.78\nLocation: Dubai\nPayment Channel: card\n\n"
        );
    }

    #[test]
    fn test_write_record_fields() {
        let mut out = Vec::new();
        write_record(&mut out, 7, &record("T42", "payment", "Dubai", "True")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("===== Transaction 7 =====\n"));
        assert!(text.contains("ID: T42\n"));
        assert!(text.contains("Amount: 343.78\n"));
        assert!(text.contains("Location: Dubai\n"));
        assert!(text.contains("Is Fraud: True\n"));
        assert!(text.contains("Velocity: 3\n"));
    }
}
