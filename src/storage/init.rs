//! Storage initialization
//!
//! Handles first-run setup: directories, an empty record file, and the
//! bundled category catalog.

use crate::config::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::CategoryCatalog;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &TallyPaths) -> Result<(), TallyError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    // Seed an empty record set so the data file is always present
    if !paths.records_file().exists() {
        #[derive(serde::Serialize)]
        struct Empty {
            records: Vec<crate::models::BudgetRecord>,
        }
        write_json_atomic(paths.records_file(), &Empty { records: Vec::new() })?;
    }

    // Write the bundled catalog so users have a file to edit
    if !paths.catalog_file().exists() {
        CategoryCatalog::default().save(&paths.catalog_file())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.records_file().exists());
        assert!(paths.catalog_file().exists());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        initialize_storage(&paths).unwrap();

        let catalog = CategoryCatalog::load(&paths.catalog_file()).unwrap();
        assert!(catalog.validate().is_ok());
    }
}
