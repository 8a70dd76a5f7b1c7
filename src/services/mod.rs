//! Business logic layer
//!
//! Services bridge the CLI and the storage layer: validation against the
//! category catalog, record lifecycle, and CSV import.

pub mod import;
pub mod record;

pub use import::{import_records, parse_records_csv, ImportOutcome, SkippedRow};
pub use record::RecordService;
