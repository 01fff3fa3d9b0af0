//! CSV format handling for transaction records
//!
//! This module centralizes all input format concerns, providing:
//! - CsvRecord structure for positional deserialization
//! - Conversion from CSV records to domain types
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{LedgerError, TransactionRecord};
use csv::StringRecord;
use serde::Deserialize;
use std::str::FromStr;

/// Number of columns in every data row
pub const FIELD_COUNT: usize = 18;

/// Raw CSV row, deserialized by position
///
/// Numeric columns are kept as strings so that empty values can default to
/// zero and malformed values can be reported with their column name.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    pub transaction_id: String,
    pub timestamp: String,
    pub sender_account: String,
    pub receiver_account: String,
    pub amount: String,
    pub transaction_type: String,
    pub merchant_category: String,
    pub location: String,
    pub device_used: String,
    pub is_fraud: String,
    pub fraud_type: String,
    pub time_since_last_transaction: String,
    pub spending_deviation_score: String,
    pub velocity_score: String,
    pub geo_anomaly_score: String,
    pub payment_channel: String,
    pub ip_address: String,
    pub device_hash: String,
}

/// Deserialize one raw row into a CsvRecord
///
/// # Arguments
///
/// * `row` - The raw CSV row
/// * `line` - Line number of the row in the input file, for error messages
pub fn parse_row(row: &StringRecord, line: u64) -> Result<CsvRecord, LedgerError> {
    if row.len() != FIELD_COUNT {
        return Err(LedgerError::field_count(line, FIELD_COUNT, row.len()));
    }

    row.deserialize(None).map_err(|e| LedgerError::Parse {
        line: Some(line),
        message: e.to_string(),
    })
}

/// Parse a numeric column, treating an empty value as zero
fn parse_number<T>(raw: &str, field: &str, line: u64) -> Result<T, LedgerError>
where
    T: FromStr + Default,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse()
        .map_err(|_| LedgerError::invalid_number(line, field, raw))
}

/// Parse a floating-point column; `NaN` and infinities are rejected
fn parse_float(raw: &str, field: &str, line: u64) -> Result<f64, LedgerError> {
    let value: f64 = parse_number(raw, field, line)?;
    if !value.is_finite() {
        return Err(LedgerError::invalid_number(line, field, raw.trim()));
    }
    Ok(value)
}

/// Convert a CsvRecord to a TransactionRecord
///
/// String columns are taken as-is. Numeric columns that are empty default to
/// zero; any other non-numeric or non-finite value rejects the whole row.
///
/// # Returns
///
/// * `Ok(TransactionRecord)` - Successfully converted record
/// * `Err(LedgerError::InvalidNumber)` - A numeric column could not be parsed
pub fn convert_csv_record(csv_record: CsvRecord, line: u64) -> Result<TransactionRecord, LedgerError> {
    let amount = parse_float(&csv_record.amount, "amount", line)?;
    let time_since_last_transaction = parse_float(
        &csv_record.time_since_last_transaction,
        "time_since_last_transaction",
        line,
    )?;
    let spending_deviation_score = parse_float(
        &csv_record.spending_deviation_score,
        "spending_deviation_score",
        line,
    )?;
    let velocity_score = parse_number(&csv_record.velocity_score, "velocity_score", line)?;
    let geo_anomaly_score =
        parse_float(&csv_record.geo_anomaly_score, "geo_anomaly_score", line)?;

    Ok(TransactionRecord {
        transaction_id: csv_record.transaction_id,
        timestamp: csv_record.timestamp,
        sender_account: csv_record.sender_account,
        receiver_account: csv_record.receiver_account,
        amount,
        transaction_type: csv_record.transaction_type,
        merchant_category: csv_record.merchant_category,
        location: csv_record.location,
        device_used: csv_record.device_used,
        is_fraud: csv_record.is_fraud,
        fraud_type: csv_record.fraud_type,
        time_since_last_transaction,
        spending_deviation_score,
        velocity_score,
        geo_anomaly_score,
        payment_channel: csv_record.payment_channel,
        ip_address: csv_record.ip_address,
        device_hash: csv_record.device_hash,
    })
}
