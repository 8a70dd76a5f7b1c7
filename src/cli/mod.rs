//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and report layers.

pub mod export;
pub mod import;
pub mod record;
pub mod report;

pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import_command;
pub use record::{handle_record_command, RecordCommands};
pub use report::{handle_report_command, ReportCommands};
