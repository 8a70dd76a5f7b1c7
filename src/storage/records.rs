//! Record repository for JSON storage
//!
//! Manages loading and saving budget records to records.json. The report
//! engine never reads through this directly; callers take a snapshot and hand
//! the engine an immutable slice.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{BudgetRecord, RecordId};

/// Serializable record data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecordData {
    records: Vec<BudgetRecord>,
}

/// Repository for budget record persistence
pub struct RecordRepository {
    path: PathBuf,
    data: RwLock<HashMap<RecordId, BudgetRecord>>,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: RecordData = super::file_io::read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.records {
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = RecordData { records };
        super::file_io::write_json_atomic(&self.path, &file_data)
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> Result<Option<BudgetRecord>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Insert or update a record
    pub fn upsert(&self, record: BudgetRecord) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(record.id, record);
        Ok(())
    }

    /// Remove a record, returning it if it existed
    pub fn remove(&self, id: RecordId) -> Result<Option<BudgetRecord>, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }

    /// Take a full snapshot of the current record set, sorted by date
    /// (most recent first)
    pub fn snapshot(&self) -> Result<Vec<BudgetRecord>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(records)
    }

    /// Number of records currently held
    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
