//! CLI commands for data export
//!
//! Exports the record set (optionally filtered) to CSV or JSON files.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{TallyError, TallyResult};
use crate::export::{export_records_csv, export_records_json};
use crate::models::{BudgetRecord, RecordKind};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export records to CSV
    Csv {
        /// Output file path
        output: PathBuf,

        /// Only records from this year
        #[arg(short, long)]
        year: Option<i32>,

        /// Only records of this kind
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Export records to JSON
    Json {
        /// Output file path
        output: PathBuf,

        /// Only records from this year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TallyResult<()> {
    match cmd {
        ExportCommands::Csv { output, year, kind } => handle_export_csv(storage, output, year, kind),
        ExportCommands::Json { output, year } => handle_export_json(storage, output, year),
    }
}

fn filtered_snapshot(
    storage: &Storage,
    year: Option<i32>,
    kind: Option<RecordKind>,
) -> TallyResult<Vec<BudgetRecord>> {
    let snapshot = storage.records.snapshot()?;
    Ok(snapshot
        .into_iter()
        .filter(|r| year.map_or(true, |y| r.year() == y))
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .collect())
}

fn handle_export_csv(
    storage: &Storage,
    output: PathBuf,
    year: Option<i32>,
    kind: Option<String>,
) -> TallyResult<()> {
    let kind = kind
        .map(|k| {
            k.parse::<RecordKind>()
                .map_err(|e| TallyError::Validation(e.to_string()))
        })
        .transpose()?;

    let records = filtered_snapshot(storage, year, kind)?;

    let file = File::create(&output).map_err(|e| {
        TallyError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_records_csv(&records, &mut writer)?;

    println!("Exported {} records to: {}", records.len(), output.display());
    Ok(())
}

fn handle_export_json(storage: &Storage, output: PathBuf, year: Option<i32>) -> TallyResult<()> {
    let records = filtered_snapshot(storage, year, None)?;
    let count = records.len();

    let file = File::create(&output).map_err(|e| {
        TallyError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_records_json(records, &mut writer)?;

    println!("Exported {} records to: {}", count, output.display());
    Ok(())
}
