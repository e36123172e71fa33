//! Export module for the expense tracker
//!
//! - CSV: the flat record listing (spreadsheet-compatible)
//! - JSON: machine-readable dump with metadata
//! - YAML: human-readable dump with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_records_csv, CSV_HEADER};
pub use json::{export_records_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_records_yaml;
