//! User settings for the expense tracker
//!
//! Manages the storage backend choice, storage locations, the overspend rule
//! and display preferences.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::RemarksRule;
use crate::storage::{BackendKind, StoreConfig};

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Which backend stores records
    #[serde(default)]
    pub backend: BackendKind,

    /// Override for the file backend's record list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_file: Option<PathBuf>,

    /// Override for the SQLite database location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_file: Option<PathBuf>,

    /// Rule used to classify new records
    #[serde(default)]
    pub remarks_rule: RemarksRule,

    /// Currency symbol shown in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backend: BackendKind::default(),
            records_file: None,
            database_file: None,
            remarks_rule: RemarksRule::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Resolve the store configuration against the default paths
    pub fn store_config(&self, paths: &ExpensePaths) -> StoreConfig {
        StoreConfig {
            backend: self.backend,
            records_file: self
                .records_file
                .clone()
                .unwrap_or_else(|| paths.records_file()),
            database_file: self
                .database_file
                .clone()
                .unwrap_or_else(|| paths.database_file()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.backend, BackendKind::File);
        assert_eq!(settings.remarks_rule, RemarksRule::SavingsMargin);
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            backend: BackendKind::Sqlite,
            remarks_rule: RemarksRule::StrictBudget,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.backend, BackendKind::Sqlite);
        assert_eq!(loaded.remarks_rule, RemarksRule::StrictBudget);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"backend": "sqlite"}"#).unwrap();
        assert_eq!(settings.backend, BackendKind::Sqlite);
        assert_eq!(settings.remarks_rule, RemarksRule::SavingsMargin);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_store_config_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let config = Settings::default().store_config(&paths);
        assert_eq!(config.records_file, paths.records_file());

        let custom = temp_dir.path().join("elsewhere.json");
        let settings = Settings {
            records_file: Some(custom.clone()),
            ..Settings::default()
        };
        assert_eq!(settings.store_config(&paths).records_file, custom);
    }
}
