//! Channel Ledger Library
//! # Overview
//!
//! This library loads a CSV export of financial transactions, partitions the
//! records by payment channel and keeps each partition in a store backed by
//! either a linked list or a growable array, so the two can be compared on the
//! same workload.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, Channel, Field, LedgerError)
//! - [`cli`] - CLI arguments parsing and the interactive menus
//! - [`core`] - Store logic:
//!   - [`core::algorithms`] - Stable merge sort and duplicate-expanding binary search
//!   - [`core::linked_store`] - Node arena with index links
//!   - [`core::array_store`] - Vec-backed store
//!   - [`core::channels`] - One store per payment channel
//! - [`io`] - CSV import, JSON export and console rendering
//!
//! # Payment Channels
//!
//! Records are routed on the exact, case-sensitive value of their
//! `payment_channel` column:
//!
//! - **ACH**: `ACH`
//! - **Card**: `card`
//! - **UPI**: `UPI`
//! - **Wire Transfer**: `wire_transfer`
//!
//! Any other value is dropped during import.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{create_store, ChannelStores, SortOutcome, StoreKind, TransactionStore};
pub use io::{display, export_json, import_csv, ImportReport};
pub use types::{Channel, Field, LedgerError, TransactionRecord};
