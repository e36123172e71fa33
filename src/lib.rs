//! Expense Tracker - monthly income and spending log
//!
//! The user enters a month's salary and what was spent in seven fixed
//! categories. The crate totals the spending, classifies the month as
//! overspent or saved, persists the record and lists past records.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories, the overspend rule and the record itself
//! - `storage`: The record store and its JSON file and SQLite backends
//! - `services`: Form-to-record business logic
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::models::ExpenseForm;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::open_store;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = open_store(&settings.store_config(&paths));
//! let mut service = ExpenseService::new(&mut *store, settings.remarks_rule);
//! let record = service.record(ExpenseForm::new("Oct-2025", "50,000"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ErrorKind, ExpenseError, ExpenseResult};
