//! Transaction-related types for the channel ledger
//!
//! This module defines the transaction record as read from the input CSV,
//! the payment channels used to partition records, and the field selector
//! used by sort and search operations.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One financial event as read from the input CSV
///
/// Field order matches the CSV column order and is also the key order of
/// the JSON export. Records are never mutated after import; stores only
/// reorder them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub timestamp: String,
    pub sender_account: String,
    pub receiver_account: String,

    /// Monetary amount, zero when the CSV column was empty
    pub amount: f64,

    pub transaction_type: String,
    pub merchant_category: String,
    pub location: String,
    pub device_used: String,

    /// Fraud flag exactly as written in the CSV (e.g. "True" / "False")
    pub is_fraud: String,
    pub fraud_type: String,

    pub time_since_last_transaction: f64,
    pub spending_deviation_score: f64,
    pub velocity_score: i32,
    pub geo_anomaly_score: f64,

    /// Raw payment channel; see [`Channel`] for the recognized values
    pub payment_channel: String,
    pub ip_address: String,
    pub device_hash: String,
}

impl TransactionRecord {
    /// Parse the raw payment channel of this record
    ///
    /// Returns `None` when the channel is not one of the four recognized rails.
    pub fn channel(&self) -> Option<Channel> {
        self.payment_channel.parse().ok()
    }
}

/// Payment rails used to partition records into separate stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Ach,
    Card,
    Upi,
    WireTransfer,
}

impl Channel {
    /// All channels, in menu order
    pub const ALL: [Channel; 4] = [
        Channel::Ach,
        Channel::Card,
        Channel::Upi,
        Channel::WireTransfer,
    ];

    /// The exact value used in the `payment_channel` CSV column
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Ach => "ACH",
            Channel::Card => "card",
            Channel::Upi => "UPI",
            Channel::WireTransfer => "wire_transfer",
        }
    }

    /// Human-readable name for menus and reports
    pub fn display_name(self) -> &'static str {
        match self {
            Channel::Ach => "ACH",
            Channel::Card => "Card",
            Channel::Upi => "UPI",
            Channel::WireTransfer => "Wire Transfer",
        }
    }
}

impl FromStr for Channel {
    type Err = ();

    /// Channel names are matched exactly (case-sensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACH" => Ok(Channel::Ach),
            "card" => Ok(Channel::Card),
            "UPI" => Ok(Channel::Upi),
            "wire_transfer" => Ok(Channel::WireTransfer),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Record attribute a sort or search operates against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TransactionType,
    Location,
    FraudStatus,
}

impl Field {
    /// Borrow the value of this field from a record
    pub fn value(self, record: &TransactionRecord) -> &str {
        match self {
            Field::TransactionType => &record.transaction_type,
            Field::Location => &record.location,
            Field::FraudStatus => &record.is_fraud,
        }
    }

    /// Human-readable name for reports
    pub fn label(self) -> &'static str {
        match self {
            Field::TransactionType => "transaction type",
            Field::Location => "location",
            Field::FraudStatus => "fraud status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
