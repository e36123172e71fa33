//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Broad classification of an [`ExpenseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was missing or empty
    InvalidInput,
    /// Numeric text could not be parsed into an amount
    InvalidAmount,
    /// The backing medium could not be read
    StorageReadFailure,
    /// The backing medium could not be written; the record was not saved
    StorageWriteFailure,
    /// Configuration could not be loaded or saved
    Config,
    /// An export could not be produced
    Export,
    /// Any other I/O problem
    Io,
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Empty required field (e.g. missing month)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unparseable or out-of-range amount text
    #[error("Invalid amount for '{field}': {value:?} ({reason})")]
    InvalidAmount {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Reading persisted records failed
    #[error("Storage read failed: {0}")]
    StorageRead(String),

    /// Persisting records failed
    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExpenseError {
    /// Create an invalid amount error for the named field
    pub fn invalid_amount(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidAmount {
            field,
            value: value.into(),
            reason,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            Self::StorageRead(_) => ErrorKind::StorageReadFailure,
            Self::StorageWrite(_) => ErrorKind::StorageWriteFailure,
            Self::Config(_) => ErrorKind::Config,
            Self::Export(_) => ErrorKind::Export,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// The offending field, for amount errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidAmount { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {}", err))
    }
}

// Database errors only surface from writes; reads are mapped explicitly.
impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageWrite(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
