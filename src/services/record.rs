//! Record service
//!
//! Business logic for creating, listing, and removing budget records. All
//! mutation goes through here so catalog and amount validation happen in one
//! place; the report engine itself only ever sees immutable snapshots.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{BudgetRecord, CategoryCatalog, Money, RecordId, RecordKind};
use crate::storage::Storage;

/// Service for record operations
pub struct RecordService<'a> {
    storage: &'a Storage,
    catalog: &'a CategoryCatalog,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(storage: &'a Storage, catalog: &'a CategoryCatalog) -> Self {
        Self { storage, catalog }
    }

    /// Add a new record after validating it against the catalog
    pub fn add(
        &self,
        date: NaiveDate,
        kind: RecordKind,
        category: &str,
        amount: Money,
        description: &str,
    ) -> TallyResult<BudgetRecord> {
        if !self.catalog.contains(kind, category) {
            return Err(TallyError::Validation(format!(
                "Category '{}' is not in the '{}' vocabulary",
                category, kind
            )));
        }

        let record = BudgetRecord::with_description(date, kind, category, amount, description);
        record
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.records.upsert(record.clone())?;
        self.storage.records.save()?;

        Ok(record)
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> TallyResult<Option<BudgetRecord>> {
        self.storage.records.get(id)
    }

    /// Remove a record by ID
    pub fn remove(&self, id: RecordId) -> TallyResult<BudgetRecord> {
        let removed = self
            .storage
            .records
            .remove(id)?
            .ok_or_else(|| TallyError::record_not_found(id.to_string()))?;
        self.storage.records.save()?;
        Ok(removed)
    }

    /// Take a snapshot of the full record set for reporting
    pub fn snapshot(&self) -> TallyResult<Vec<BudgetRecord>> {
        self.storage.records.snapshot()
    }
}
