//! CSV import and channel routing
//!
//! Streams rows from a [`RecordReader`], routes every parsed record into the
//! store of its payment channel and summarizes the run in an [`ImportReport`].
//!
//! # Error Handling
//!
//! - A file that cannot be opened fails the import before any row is read
//! - An I/O failure while reading fails the import
//! - Malformed rows are logged and skipped; one bad row never aborts the batch
//! - Rows with an unrecognized payment channel are dropped silently

use crate::core::{ChannelStores, StoreKind};
use crate::io::reader::RecordReader;
use crate::types::{Channel, LedgerError};
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, trace, warn};

/// Summary of one import run
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    /// Records parsed and routed to a channel store
    pub routed: usize,
    /// Rows dropped because they could not be parsed
    pub rejected: usize,
    /// Rows parsed but dropped because their channel is not recognized
    pub unrouted: usize,
    /// Approximate bytes read from the input
    pub bytes_read: u64,
    /// Wall-clock time spent reading and routing
    pub elapsed: Duration,
    /// Store sizes after the import, in menu order
    pub per_channel: [(Channel, usize); 4],
    pub kind: StoreKind,
}

impl ImportReport {
    /// Number of records routed to a channel
    pub fn count(&self, channel: Channel) -> usize {
        self.per_channel
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, count)| *count)
            .unwrap_or_default()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successfully processed {} transactions.", self.routed)?;
        if self.rejected > 0 {
            writeln!(f, "Skipped {} malformed rows.", self.rejected)?;
        }
        writeln!(f, "{} Implementation:", self.kind)?;
        writeln!(
            f,
            "Time taken to load CSV: {:.6} seconds.",
            self.elapsed.as_secs_f64()
        )?;
        writeln!(
            f,
            "Estimated memory usage: ~{:.2} MB",
            self.bytes_read as f64 / (1024.0 * 1024.0)
        )?;
        writeln!(f, "Transaction counts by channel:")?;
        for (channel, count) in self.per_channel {
            writeln!(f, "- {}: {}", channel, count)?;
        }
        Ok(())
    }
}

/// Import a CSV file into four fresh stores of the given kind
pub fn import_csv(path: &Path, kind: StoreKind) -> Result<(ChannelStores, ImportReport), LedgerError> {
    let mut stores = ChannelStores::new(kind);
    let report = import_into(path, &mut stores)?;
    Ok((stores, report))
}

/// Import a CSV file into existing channel stores
///
/// # Returns
///
/// * `Ok(ImportReport)` - Import ran to completion (possibly skipping rows)
/// * `Err(LedgerError)` - The file could not be opened or stopped being readable
pub fn import_into(path: &Path, stores: &mut ChannelStores) -> Result<ImportReport, LedgerError> {
    let start = Instant::now();
    let mut reader = RecordReader::new(path)?;
    info!(path = %path.display(), kind = %stores.kind(), "importing transactions");

    let mut routed = 0;
    let mut rejected = 0;
    let mut unrouted = 0;

    for result in reader.by_ref() {
        match result {
            Ok(record) => match stores.route(record) {
                Ok(_) => routed += 1,
                Err(record) => {
                    trace!(
                        transaction_id = %record.transaction_id,
                        channel = %record.payment_channel,
                        "dropping record with unrecognized channel"
                    );
                    unrouted += 1;
                }
            },
            Err(e) if e.is_row_error() => {
                warn!("Error parsing row: {}", e);
                rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let report = ImportReport {
        routed,
        rejected,
        unrouted,
        bytes_read: reader.bytes_read(),
        elapsed: start.elapsed(),
        per_channel: stores.counts(),
        kind: stores.kind(),
    };

    info!(
        routed = report.routed,
        rejected = report.rejected,
        unrouted = report.unrouted,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "import finished"
    );

    Ok(report)
}
