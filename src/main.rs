//! Channel Ledger CLI
//!
//! Interactive explorer for transaction CSV exports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- financial_fraud_detection_dataset.csv
//! cargo run -- --store linked financial_fraud_detection_dataset.csv
//! cargo run -- --store array --display-limit 25 financial_fraud_detection_dataset.csv
//! RUST_LOG=channel_ledger=debug cargo run
//! ```
//!
//! The program loads the CSV into four per-channel stores and then drives a
//! menu on stdin/stdout. Diagnostics are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (menu exit or end of input)
//! - 1: Error (invalid implementation choice, file not found, file not readable, etc.)

use channel_ledger::cli;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("channel_ledger=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = cli::run_session(&args, io::stdin().lock(), io::stdout()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
