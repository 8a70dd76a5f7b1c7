//! CSV Import service
//!
//! Parses record CSV files (the same column order the exporter writes) and
//! loads them into storage. Amounts go through the parse-or-zero policy so a
//! malformed amount never aborts a whole import.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{TallyError, TallyResult};
use crate::models::{BudgetRecord, CategoryCatalog, Money, RecordKind};
use crate::storage::Storage;

/// A row that could not be turned into a record
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based row number in the source file (excluding the header)
    pub row: usize,
    /// Why the row was skipped
    pub reason: String,
}

/// Outcome of parsing a record CSV
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Successfully parsed records
    pub records: Vec<BudgetRecord>,
    /// Rows that could not be parsed
    pub skipped: Vec<SkippedRow>,
}

/// Parse records from CSV data
///
/// Expects the exporter's column order: date, type, category, amount,
/// description. A malformed amount contributes zero; a malformed date or
/// kind skips the row (there is no sensible zero for those).
pub fn parse_records_csv<R: Read>(reader: R) -> TallyResult<ImportOutcome> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut outcome = ImportOutcome::default();

    for (i, result) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                outcome.skipped.push(SkippedRow {
                    row,
                    reason: format!("Malformed CSV row: {}", e),
                });
                continue;
            }
        };

        if record.len() < 4 {
            outcome.skipped.push(SkippedRow {
                row,
                reason: format!("Expected at least 4 columns, got {}", record.len()),
            });
            continue;
        }

        let date = match NaiveDate::parse_from_str(record[0].trim(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                outcome.skipped.push(SkippedRow {
                    row,
                    reason: format!("Invalid date: {}", &record[0]),
                });
                continue;
            }
        };

        let kind: RecordKind = match record[1].trim().parse() {
            Ok(k) => k,
            Err(e) => {
                outcome.skipped.push(SkippedRow {
                    row,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let category = record[2].trim().to_string();
        if category.is_empty() {
            outcome.skipped.push(SkippedRow {
                row,
                reason: "Empty category".to_string(),
            });
            continue;
        }

        // Parse-or-zero: a non-numeric amount contributes zero rather than
        // failing the import.
        let amount = Money::parse_or_zero(&record[3]);

        let description = record.get(4).unwrap_or("").to_string();

        outcome.records.push(BudgetRecord::with_description(
            date,
            kind,
            category,
            amount.abs(),
            description,
        ));
    }

    Ok(outcome)
}

/// Import records from a CSV file into storage
///
/// Rows whose category is not in the catalog's vocabulary for their kind are
/// skipped, keeping the stored record set consistent with the catalog.
pub fn import_records(
    storage: &Storage,
    catalog: &CategoryCatalog,
    path: &Path,
) -> TallyResult<ImportOutcome> {
    let file = std::fs::File::open(path)
        .map_err(|e| TallyError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut outcome = parse_records_csv(file)?;

    let mut imported = Vec::new();
    for record in outcome.records.drain(..) {
        if !catalog.contains(record.kind, &record.category) {
            outcome.skipped.push(SkippedRow {
                row: 0,
                reason: format!(
                    "Category '{}' is not in the '{}' vocabulary",
                    record.category, record.kind
                ),
            });
            continue;
        }
        storage.records.upsert(record.clone())?;
        imported.push(record);
    }
    storage.records.save()?;

    outcome.records = imported;
    Ok(outcome)
}
