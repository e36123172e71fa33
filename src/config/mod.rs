//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Path resolution for settings and storage files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
