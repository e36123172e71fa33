//! Storage layer for the expense tracker
//!
//! Records go into an append-only log read back newest first. Two backends
//! implement [`ExpenseStore`]: a single JSON file and a SQLite table. The
//! backend is picked from an explicit [`StoreConfig`].

pub mod file_io;
pub mod file_store;
pub mod sqlite_store;

pub use file_io::{read_json, write_json_atomic};
pub use file_store::JsonFileStore;
pub use sqlite_store::SqliteStore;

use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Append-only record log with full-scan read-back
///
/// Implementations open and release their storage handle within each call.
pub trait ExpenseStore {
    /// Durably persist a record and return the stored copy with `saved_at` set
    ///
    /// On failure nothing is saved and previously stored records are intact.
    fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<ExpenseRecord>;

    /// All stored records, most recent first
    fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>>;

    /// Delete every record and remove the backing file
    fn clear_all(&mut self) -> ExpenseResult<()>;
}

/// Which persistence mechanism backs the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Whole record list serialized to one JSON file
    #[default]
    File,
    /// One row per record in a SQLite table
    Sqlite,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::File => write!(f, "file"),
            BackendKind::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Everything needed to construct a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: BackendKind,
    pub records_file: PathBuf,
    pub database_file: PathBuf,
}

impl StoreConfig {
    /// The file the selected backend writes to
    pub fn location(&self) -> &PathBuf {
        match self.backend {
            BackendKind::File => &self.records_file,
            BackendKind::Sqlite => &self.database_file,
        }
    }
}

/// Open the configured backend
///
/// Never fails: an unreadable medium yields an empty store and a warning.
pub fn open_store(config: &StoreConfig) -> Box<dyn ExpenseStore + Send> {
    log::debug!("Opening {} store at {}", config.backend, config.location().display());
    match config.backend {
        BackendKind::File => Box::new(JsonFileStore::open(config.records_file.clone())),
        BackendKind::Sqlite => Box::new(SqliteStore::open(config.database_file.clone())),
    }
}

/// A store guarded by a single lock for use from several threads
pub struct SharedStore {
    inner: Mutex<Box<dyn ExpenseStore + Send>>,
}

impl SharedStore {
    pub fn new(store: Box<dyn ExpenseStore + Send>) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    fn lock(&self) -> ExpenseResult<MutexGuard<'_, Box<dyn ExpenseStore + Send>>> {
        self.inner
            .lock()
            .map_err(|e| ExpenseError::StorageWrite(format!("Failed to acquire store lock: {}", e)))
    }

    pub fn append(&self, record: ExpenseRecord) -> ExpenseResult<ExpenseRecord> {
        self.lock()?.append(record)
    }

    pub fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.lock()?.list_all()
    }

    pub fn clear_all(&self) -> ExpenseResult<()> {
        self.lock()?.clear_all()
    }
}
