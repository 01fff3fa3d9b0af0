//! Error types for the channel ledger
//!
//! This module defines all error types that can occur while importing,
//! querying and exporting transaction records.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Input file missing or unreadable (fatal for import)
//! - **Row Errors**: Malformed CSV rows (recoverable, the row is skipped)
//! - **Export Errors**: Destination file could not be written (recoverable)

use thiserror::Error;

/// Main error type for the channel ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents import from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the input file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV-level read error for a single row
    ///
    /// This is a recoverable error - the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Row does not have the expected number of columns
    ///
    /// This is a recoverable error - the row is skipped.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A numeric column holds a non-numeric value
    ///
    /// This is a recoverable error - the row is skipped.
    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: u64,
        /// Column name
        field: String,
        /// The offending raw value
        value: String,
    },

    /// Export destination could not be created or written
    ///
    /// Reported to the caller; the process keeps running.
    #[error("Failed to export to '{path}': {message}")]
    Export { path: String, message: String },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return LedgerError::Io {
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        LedgerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        LedgerError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a FieldCount error
    pub fn field_count(line: u64, expected: usize, found: usize) -> Self {
        LedgerError::FieldCount {
            line,
            expected,
            found,
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(line: u64, field: &str, value: &str) -> Self {
        LedgerError::InvalidNumber {
            line,
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an Export error
    pub fn export(path: &str, message: impl ToString) -> Self {
        LedgerError::Export {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether import can continue past this error
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            LedgerError::Parse { .. }
                | LedgerError::FieldCount { .. }
                | LedgerError::InvalidNumber { .. }
        )
    }
}
