//! JSON Export functionality
//!
//! Exports every stored record to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All records, most recent first
    pub records: Vec<ExpenseRecord>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub record_count: usize,

    /// Records whose verdict is over the threshold
    pub overspent_count: usize,

    pub earliest_saved_at: Option<DateTime<Utc>>,

    pub latest_saved_at: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Build an export from a record listing
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        let metadata = ExportMetadata {
            record_count: records.len(),
            overspent_count: records.iter().filter(|r| r.remarks.is_over()).count(),
            earliest_saved_at: records.iter().filter_map(|r| r.saved_at).min(),
            latest_saved_at: records.iter().filter_map(|r| r.saved_at).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            metadata,
        }
    }
}

/// Export records to JSON
pub fn export_records_json<W: Write>(
    records: Vec<ExpenseRecord>,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_records(records);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}
