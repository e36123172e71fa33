//! SQLite-backed record store
//!
//! One row per record in the `expenses` table. A connection is opened for
//! each operation and dropped before it returns.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

use super::file_io::remove_if_exists;
use super::ExpenseStore;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryAmounts, ExpenseRecord, Money, Remarks};

/// Amounts are stored as integer cents
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    month             TEXT NOT NULL,
    salary            INTEGER NOT NULL DEFAULT 0,
    electricity_bill  INTEGER NOT NULL DEFAULT 0,
    water_bill        INTEGER NOT NULL DEFAULT 0,
    gas_cylinder      INTEGER NOT NULL DEFAULT 0,
    food              INTEGER NOT NULL DEFAULT 0,
    travel            INTEGER NOT NULL DEFAULT 0,
    shopping          INTEGER NOT NULL DEFAULT 0,
    miscellaneous     INTEGER NOT NULL DEFAULT 0,
    total_expense     INTEGER NOT NULL DEFAULT 0,
    remarks           TEXT NOT NULL DEFAULT '',
    created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_expenses_created_at ON expenses(created_at);
"#;

const SELECT_ALL: &str = "SELECT month, salary, electricity_bill, water_bill, gas_cylinder, food, \
     travel, shopping, miscellaneous, total_expense, remarks, created_at \
     FROM expenses ORDER BY created_at DESC, id DESC";

/// Store backed by a single SQLite table
#[derive(Debug)]
pub struct SqliteStore {
    path: PathBuf,
    /// Set when the database could not be read at open; reads return nothing
    unreadable: bool,
}

impl SqliteStore {
    /// Open the store and verify the database is readable
    ///
    /// A database that cannot be opened or queried is logged and the store
    /// behaves as empty until a write succeeds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            unreadable: false,
        };

        if store.path.exists() {
            if let Err(e) = store.count() {
                log::warn!("Starting with an empty record list: {}", e);
                store.unreadable = true;
            }
        }

        store
    }

    /// Location of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }

    /// Number of stored rows
    pub fn count(&self) -> ExpenseResult<usize> {
        if !self.path.exists() {
            return Ok(0);
        }
        let conn = self.connect().map_err(read_error)?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .map_err(read_error)?;
        Ok(count as usize)
    }

    fn ensure_parent_dir(&self) -> ExpenseResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::StorageWrite(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl ExpenseStore for SqliteStore {
    fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<ExpenseRecord> {
        self.ensure_parent_dir()?;
        let conn = self.connect()?;

        let amounts = &record.amounts;
        let created_at: String = conn.query_row(
            "INSERT INTO expenses
             (month, salary, electricity_bill, water_bill, gas_cylinder, food, travel,
              shopping, miscellaneous, total_expense, remarks)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             RETURNING created_at",
            params![
                record.month,
                record.salary.cents(),
                amounts.electricity.cents(),
                amounts.water.cents(),
                amounts.gas.cents(),
                amounts.food.cents(),
                amounts.travel.cents(),
                amounts.shopping.cents(),
                amounts.miscellaneous.cents(),
                record.total.cents(),
                record.remarks.as_str(),
            ],
            |row| row.get(0),
        )?;

        let saved_at = parse_timestamp(&created_at).map_err(|e| {
            ExpenseError::StorageWrite(format!("Database returned a bad timestamp: {}", e))
        })?;

        self.unreadable = false;
        log::info!("Saved record for {} to {}", record.month, self.path.display());
        Ok(record.stamped(saved_at))
    }

    fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        if self.unreadable || !self.path.exists() {
            return Ok(Vec::new());
        }

        let conn = self.connect().map_err(read_error)?;
        let mut stmt = conn.prepare(SELECT_ALL).map_err(read_error)?;
        let rows = stmt.query_map([], row_to_record).map_err(read_error)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(read_error)
    }

    fn clear_all(&mut self) -> ExpenseResult<()> {
        remove_if_exists(&self.path)?;
        remove_if_exists(journal_path(&self.path))?;
        self.unreadable = false;
        log::info!("Cleared all records from {}", self.path.display());
        Ok(())
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    let money = |idx: usize| -> rusqlite::Result<Money> { Ok(Money::from_cents(row.get(idx)?)) };

    let remarks_text: String = row.get(10)?;
    let remarks = Remarks::parse(&remarks_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            10,
            Type::Text,
            Box::new(ExpenseError::StorageRead(format!(
                "Unknown remarks value: {:?}",
                remarks_text
            ))),
        )
    })?;

    let created_at: String = row.get(11)?;
    let saved_at = parse_timestamp(&created_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e)))?;

    Ok(ExpenseRecord {
        month: row.get(0)?,
        salary: money(1)?,
        amounts: CategoryAmounts {
            electricity: money(2)?,
            water: money(3)?,
            gas: money(4)?,
            food: money(5)?,
            travel: money(6)?,
            shopping: money(7)?,
            miscellaneous: money(8)?,
        },
        total: money(9)?,
        remarks,
        saved_at: Some(saved_at),
    })
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

fn journal_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push("-journal");
    PathBuf::from(name)
}

fn read_error(e: rusqlite::Error) -> ExpenseError {
    ExpenseError::StorageRead(e.to_string())
}
