//! JSON export of a single store
//!
//! Records are written in the store's current order as a pretty-printed JSON
//! array. Keys follow the field order of [`TransactionRecord`], numbers are
//! unquoted. The whole document is rendered in memory first, then written to
//! a staging file next to the destination and renamed into place, so the
//! destination is either the complete document or untouched.

use crate::core::TransactionStore;
use crate::types::{LedgerError, TransactionRecord};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Render all records of a store as a JSON array
pub fn render_json(store: &dyn TransactionStore) -> Result<String, serde_json::Error> {
    let records: Vec<&TransactionRecord> = store.iter().collect();
    serde_json::to_string_pretty(&records)
}

/// Export all records of a store to a JSON file
///
/// # Returns
///
/// * `Ok(usize)` - Number of records written
/// * `Err(LedgerError::Export)` - The document could not be rendered, or the
///   file could not be created or written
pub fn export_json(store: &dyn TransactionStore, path: &Path) -> Result<usize, LedgerError> {
    let display_path = path.display().to_string();

    let document = render_json(store).map_err(|e| LedgerError::export(&display_path, e))?;

    write_staged(path, |file| file.write_all(document.as_bytes()))
        .map_err(|e| LedgerError::export(&display_path, e))?;

    info!(path = %display_path, records = store.len(), "exported transactions");
    Ok(store.len())
}

/// Sibling path the document is written to before the final rename
fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name")
    })?;
    let mut staged = name.to_os_string();
    staged.push(".partial");
    Ok(path.with_file_name(staged))
}

/// Run `write` against a staging file, then rename it over `path`
///
/// On any failure the staging file is removed and `path` is left as it was.
fn write_staged<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let staging = staging_path(path)?;
    let mut file = File::create(&staging)?;

    let written = write(&mut file).and_then(|_| file.sync_all());
    drop(file);
    let result = written.and_then(|_| fs::rename(&staging, path));

    if result.is_err() {
        debug!(path = %staging.display(), "removing staging file after failed export");
        let _ = fs::remove_file(&staging);
    }
    result
}
