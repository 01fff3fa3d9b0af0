//! I/O module
//!
//! Handles CSV input, JSON output and console rendering.
//!
//! # Components
//!
//! - `csv_format` - CSV row format (positional fields, numeric conversion)
//! - `reader` - Streaming CSV reader with iterator interface
//! - `import` - Import and channel routing
//! - `json_export` - JSON export of a single store
//! - `display` - Human-readable record rendering

pub mod csv_format;
pub mod display;
pub mod import;
pub mod json_export;
pub mod reader;

pub use csv_format::{convert_csv_record, CsvRecord};
pub use display::{display, list_matches};
pub use import::{import_csv, import_into, ImportReport};
pub use json_export::export_json;
pub use reader::RecordReader;
