//! File-backed record store
//!
//! Keeps the whole record list in memory and rewrites it as one JSON
//! document on every append. Each append costs O(n) in the number of stored
//! records, which is fine for a personal monthly log.

use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};
use super::ExpenseStore;
use crate::error::ExpenseResult;
use crate::models::ExpenseRecord;

/// On-disk layout of the record file, newest record first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RecordData {
    #[serde(default)]
    records: Vec<ExpenseRecord>,
}

/// Store that serializes the full record list to a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl JsonFileStore {
    /// Open the store, loading any existing records
    ///
    /// An unreadable or corrupt file is logged and the store starts empty.
    /// The file itself is left in place until the next successful write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match read_json::<RecordData, _>(&path) {
            Ok(data) => data.records,
            Err(e) => {
                log::warn!("Starting with an empty record list: {}", e);
                Vec::new()
            }
        };
        log::debug!("Loaded {} records from {}", records.len(), path.display());

        Self { path, records }
    }

    fn persist(&self) -> ExpenseResult<()> {
        let data = RecordData {
            records: self.records.clone(),
        };
        write_json_atomic(&self.path, &data)
    }
}

impl ExpenseStore for JsonFileStore {
    fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<ExpenseRecord> {
        let stored = record.stamped(Utc::now());
        self.records.insert(0, stored.clone());

        if let Err(e) = self.persist() {
            self.records.remove(0);
            return Err(e);
        }

        log::info!("Saved record for {} to {}", stored.month, self.path.display());
        Ok(stored)
    }

    fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        Ok(self.records.clone())
    }

    fn clear_all(&mut self) -> ExpenseResult<()> {
        remove_if_exists(&self.path)?;
        self.records.clear();
        log::info!("Cleared all records from {}", self.path.display());
        Ok(())
    }
}
