//! CSV Export functionality
//!
//! Writes the flat record listing with a fixed header row. Quoting of fields
//! containing the delimiter, a quote or a line break is left to the `csv`
//! writer, which doubles embedded quotes.

use std::io::Write;

use chrono::Local;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord};

/// Header row of the record export
pub const CSV_HEADER: [&str; 12] = [
    "Month",
    "Salary",
    "Electricity",
    "Water",
    "Gas",
    "Food",
    "Travel",
    "Shopping",
    "Miscellaneous",
    "Total",
    "Remarks",
    "SavedAt",
];

/// Format used for the SavedAt column (local time)
pub const SAVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Export records to CSV in the order given
pub fn export_records_csv<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for record in records {
        let mut row = Vec::with_capacity(CSV_HEADER.len());
        row.push(record.month.clone());
        row.push(record.salary.to_string());
        row.extend(Category::ALL.iter().map(|c| record.amount(*c).to_string()));
        row.push(record.total.to_string());
        row.push(record.remarks.to_string());
        row.push(
            record
                .saved_at
                .map(|t| t.with_timezone(&Local).format(SAVED_AT_FORMAT).to_string())
                .unwrap_or_default(),
        );

        csv_writer.write_record(&row).map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

fn export_error(e: csv::Error) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}
