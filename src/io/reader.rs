//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over transaction records from a CSV file.
//! Delegates row conversion to the csv_format module.
//!
//! # Design
//!
//! The reader reuses a single `csv::StringRecord` buffer and converts one row
//! at a time, so memory usage is O(1) per row regardless of file size. The
//! first line is treated as a header and skipped. Fields are split on every
//! comma: quoting is disabled, so a quote character is ordinary data.
//!
//! ```no_run
//! use channel_ledger::io::RecordReader;
//! use std::path::Path;
//!
//! let reader = RecordReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{}", record.transaction_id),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable) are returned from `new()`
//! - Row errors are yielded as `Err` items and iteration continues
//! - An I/O error while reading ends the iteration after being yielded once

use crate::io::csv_format::{convert_csv_record, parse_row};
use crate::types::{LedgerError, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Streaming CSV reader over transaction records
#[derive(Debug)]
pub struct RecordReader<R = File> {
    reader: csv::Reader<R>,
    row: StringRecord,
    exhausted: bool,
}

impl RecordReader<File> {
    /// Open a CSV file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(RecordReader)` if the file opened successfully
    /// * `Err(LedgerError::FileNotFound)` if the path does not exist
    /// * `Err(LedgerError::Io)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LedgerError::file_not_found(&path.display().to_string()),
            _ => LedgerError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any byte source
    ///
    /// The CSV reader is configured to:
    /// - Skip the header line
    /// - Treat every comma as a separator (no quoting)
    /// - Trim whitespace from all fields
    /// - Accept rows of any length so field counts can be reported per row
    /// - Use an 8KB buffer for efficient I/O
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            row: StringRecord::new(),
            exhausted: false,
        }
    }

    /// Approximate number of bytes consumed from the source so far
    pub fn bytes_read(&self) -> u64 {
        self.reader.position().byte()
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<TransactionRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.reader.read_record(&mut self.row) {
            Ok(true) => {
                let line = self.row.position().map(|pos| pos.line()).unwrap_or_default();
                Some(parse_row(&self.row, line).and_then(|raw| convert_csv_record(raw, line)))
            }
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                // I/O errors tend to repeat; stop after reporting the first one.
                if e.is_io_error() {
                    self.exhausted = true;
                }
                Some(Err(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "transaction_id,timestamp,sender_account,receiver_account,amount,transaction_type,merchant_category,location,device_used,is_fraud,fraud_type,time_since_last_transaction,spending_deviation_score,velocity_score,geo_anomaly_score,payment_channel,ip_address,device_hash";

    /// Build a CSV row with the given id, amount, location and channel
    fn row(id: &str, amount: &str, location: &str, channel: &str) -> String {
        format!(
            "{},2023-08-22T09:22:43,ACC1,ACC2,{},deposit,retail,{},mobile,False,,1.0,0.1,2,0.3,{},10.0.0.1,D1",
            id, amount, location, channel
        )
    }

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_new_opens_file() {
        let file = create_temp_csv(&format!("{}\n{}\n", HEADER, row("T1", "1.0", "Tokyo", "ACH")));
        assert!(RecordReader::new(file.path()).is_ok());
    }

    #[test]
    fn test_reader_new_fails_on_missing_file() {
        let result = RecordReader::new(Path::new("nonexistent.csv"));
        assert_eq!(
            result.unwrap_err(),
            LedgerError::file_not_found("nonexistent.csv")
        );
    }

    #[test]
    fn test_reader_skips_header() {
        let file = create_temp_csv(&format!("{}\n", HEADER));
        let reader = RecordReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_reader_iterates_rows_in_order() {
        let content = format!(
            "{}\n{}\n{}\n",
            HEADER,
            row("T1", "10.5", "Tokyo", "ACH"),
            row("T2", "20", "Berlin", "card")
        );
        let reader = RecordReader::from_reader(content.as_bytes());
        let records: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].transaction_id, "T1");
        assert_eq!(records[0].amount, 10.5);
        assert_eq!(records[1].location, "Berlin");
        assert_eq!(records[1].payment_channel, "card");
    }

    #[test]
    fn test_reader_continues_after_error_with_line_numbers() {
        let content = format!(
            "{}\n{}\n{}\n{}\n",
            HEADER,
            row("T1", "1.0", "Tokyo", "ACH"),
            row("T2", "invalid", "Tokyo", "ACH"),
            row("T3", "3.0", "Tokyo", "ACH")
        );
        let records: Vec<_> = RecordReader::from_reader(content.as_bytes()).collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert_eq!(
            records[1].as_ref().unwrap_err(),
            &LedgerError::invalid_number(3, "amount", "invalid")
        );
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_reader_reports_short_rows() {
        let content = format!("{}\nT1,2023-08-22,ACC1\n", HEADER);
        let records: Vec<_> = RecordReader::from_reader(content.as_bytes()).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].as_ref().unwrap_err(),
            &LedgerError::field_count(2, 18, 3)
        );
    }

    #[test]
    fn test_reader_does_not_interpret_quotes() {
        let content = format!("{}\n{}\n", HEADER, row("T1", "1.0", "\"Tokyo", "ACH"));
        let records: Vec<_> = RecordReader::from_reader(content.as_bytes())
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "\"Tokyo");
    }

    #[test]
    fn test_reader_handles_crlf_and_whitespace() {
        let content = format!(
            "{}\r\n{}\r\n",
            HEADER,
            row("  T1 ", "1.0", " Tokyo ", "ACH")
        );
        let records: Vec<_> = RecordReader::from_reader(content.as_bytes())
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transaction_id, "T1");
        assert_eq!(records[0].location, "Tokyo");
        assert_eq!(records[0].device_hash, "D1");
    }

    #[test]
    fn test_reader_counts_bytes() {
        let content = format!("{}\n{}\n", HEADER, row("T1", "1.0", "Tokyo", "ACH"));
        let mut reader = RecordReader::from_reader(content.as_bytes());
        while reader.next().is_some() {}

        assert!(reader.bytes_read() > HEADER.len() as u64);
        assert!(reader.bytes_read() <= content.len() as u64);
    }
}
