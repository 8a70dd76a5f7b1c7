//! TallyCLI - Terminal-based personal budget tracking and reporting
//!
//! This library provides the core functionality for the TallyCLI budgeting
//! application: a pure report engine over immutable snapshots of budget
//! records, plus the storage, configuration, and import/export layers that
//! feed it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, categories, periods, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (record lifecycle, CSV import)
//! - `reports`: The report engine (monthly, yearly, category, comparison, table)
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_cli::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TallyError;
