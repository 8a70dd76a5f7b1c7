//! JSON Export functionality
//!
//! Exports the record set to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::TallyResult;
use crate::models::BudgetRecord;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Record set export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Exported records
    pub records: Vec<BudgetRecord>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of records
    pub record_count: usize,

    /// Date of the earliest record
    pub earliest_record: Option<String>,

    /// Date of the latest record
    pub latest_record: Option<String>,
}

impl RecordExport {
    /// Build an export from a record snapshot
    pub fn from_records(records: Vec<BudgetRecord>) -> Self {
        let earliest = records.iter().map(|r| r.date).min();
        let latest = records.iter().map(|r| r.date).max();

        let metadata = ExportMetadata {
            record_count: records.len(),
            earliest_record: earliest.map(|d| d.to_string()),
            latest_record: latest.map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            records,
            metadata,
        }
    }
}

/// Export records to pretty-printed JSON
pub fn export_records_json<W: Write>(records: Vec<BudgetRecord>, writer: &mut W) -> TallyResult<()> {
    let export = RecordExport::from_records(records);
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordKind};
    use chrono::NaiveDate;

    #[test]
    fn test_export_metadata() {
        let records = vec![
            BudgetRecord::new(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                RecordKind::Income,
                "salary",
                Money::from_cents(1000),
            ),
            BudgetRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                RecordKind::FixedExpense,
                "rent",
                Money::from_cents(2000),
            ),
        ];

        let export = RecordExport::from_records(records);
        assert_eq!(export.metadata.record_count, 2);
        assert_eq!(export.metadata.earliest_record.as_deref(), Some("2024-01-05"));
        assert_eq!(export.metadata.latest_record.as_deref(), Some("2025-03-01"));
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
    }

    #[test]
    fn test_export_round_trip() {
        let records = vec![BudgetRecord::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            RecordKind::Savings,
            "emergency-fund",
            Money::from_cents(50000),
        )];

        let mut output = Vec::new();
        export_records_json(records.clone(), &mut output).unwrap();

        let parsed: RecordExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].id, records[0].id);
        assert_eq!(parsed.records[0].amount, records[0].amount);
    }

    #[test]
    fn test_empty_export() {
        let export = RecordExport::from_records(Vec::new());
        assert_eq!(export.metadata.record_count, 0);
        assert!(export.metadata.earliest_record.is_none());
    }
}
