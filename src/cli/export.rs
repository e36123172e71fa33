//! CLI commands for data export

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_records_csv, export_records_json, export_records_yaml};
use crate::models::ExpenseRecord;
use crate::storage::ExpenseStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV record listing
    Csv,
    /// JSON with metadata
    Json,
    /// YAML with metadata
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    #[arg(default_value = "expenses_export.csv")]
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `export`
///
/// Writes nothing when there are no records. The export is written to a
/// temporary file beside `output` and renamed into place, so a failed
/// export leaves any previous file untouched.
pub fn handle_export_command(store: &dyn ExpenseStore, args: ExportArgs) -> ExpenseResult<()> {
    let records = store.list_all()?;
    if records.is_empty() {
        println!("No records to export.");
        return Ok(());
    }
    let count = records.len();

    let temp_path = temp_path_for(&args.output);
    let result = write_export(&temp_path, records, &args).and_then(|()| {
        fs::rename(&temp_path, &args.output).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to move export into {}: {}",
                args.output.display(),
                e
            ))
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    println!("Exported {} record(s) to: {}", count, args.output.display());
    Ok(())
}

fn write_export(path: &Path, records: Vec<ExpenseRecord>, args: &ExportArgs) -> ExpenseResult<()> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_records_csv(&records, &mut writer)?,
        ExportFormat::Json => export_records_json(records, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_records_yaml(records, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to write export: {}", e)))
}

fn temp_path_for(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
