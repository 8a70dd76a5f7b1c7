//! Core data models for TallyCLI
//!
//! Defines budget records, the category vocabulary, report periods, and the
//! money type used throughout the application.

pub mod catalog;
pub mod ids;
pub mod money;
pub mod period;
pub mod record;

pub use catalog::CategoryCatalog;
pub use ids::RecordId;
pub use money::{Money, MoneyParseError};
pub use period::{PeriodParseError, ReportPeriod};
pub use record::{BudgetRecord, RecordKind, RecordValidationError};
