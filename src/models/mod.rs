//! Core data models for the expense tracker
//!
//! This module contains the data structures for a month's expense entry:
//! money amounts, spending categories, the overspend verdict and the record
//! that ties them together.

pub mod category;
pub mod money;
pub mod record;
pub mod remarks;

pub use category::{Category, CategoryAmounts};
pub use money::{Money, MoneyParseError};
pub use record::{ExpenseForm, ExpenseRecord};
pub use remarks::{Remarks, RemarksRule};
