//! Export module for TallyCLI
//!
//! Provides record-set export in two formats:
//! - CSV: spreadsheet-compatible, fixed column order
//! - JSON: machine-readable with schema versioning

pub mod csv;
pub mod json;

pub use csv::{escape_csv, export_records_csv, RECORD_CSV_HEADER};
pub use json::{export_records_json, RecordExport, EXPORT_SCHEMA_VERSION};
