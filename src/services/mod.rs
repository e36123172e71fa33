//! Service layer for the expense tracker
//!
//! The service layer sits between raw user input and the store, applying the
//! configured classification rule before anything is persisted.

pub mod expense;

pub use expense::ExpenseService;
