//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `transaction`: Transaction records, channels and field selectors
//! - `error`: Error types for the ledger

pub mod error;
pub mod transaction;

pub use error::LedgerError;
pub use transaction::{Channel, Field, TransactionRecord};
