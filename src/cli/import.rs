//! CLI command for CSV import

use std::path::PathBuf;

use crate::error::TallyResult;
use crate::models::CategoryCatalog;
use crate::services::import_records;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    catalog: &CategoryCatalog,
    file: PathBuf,
) -> TallyResult<()> {
    let outcome = import_records(storage, catalog, &file)?;

    println!("Imported {} records from {}", outcome.records.len(), file.display());

    if !outcome.skipped.is_empty() {
        println!("Skipped {} rows:", outcome.skipped.len());
        for skipped in &outcome.skipped {
            if skipped.row > 0 {
                println!("  row {}: {}", skipped.row, skipped.reason);
            } else {
                println!("  {}", skipped.reason);
            }
        }
    }

    Ok(())
}
