//! Record display formatting
//!
//! Formats the record listing as a table and the verdict shown after a save.

use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, ExpenseRecord, Remarks};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Electricity")]
    electricity: String,
    #[tabled(rename = "Water")]
    water: String,
    #[tabled(rename = "Gas")]
    gas: String,
    #[tabled(rename = "Food")]
    food: String,
    #[tabled(rename = "Travel")]
    travel: String,
    #[tabled(rename = "Shopping")]
    shopping: String,
    #[tabled(rename = "Misc")]
    miscellaneous: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Remarks")]
    remarks: String,
    #[tabled(rename = "Saved At")]
    saved_at: String,
}

impl RecordRow {
    fn new(index: usize, record: &ExpenseRecord, symbol: &str) -> Self {
        let amount = |c: Category| record.amount(c).format_with_symbol(symbol);
        Self {
            index,
            month: record.month.clone(),
            salary: record.salary.format_with_symbol(symbol),
            electricity: amount(Category::Electricity),
            water: amount(Category::Water),
            gas: amount(Category::Gas),
            food: amount(Category::Food),
            travel: amount(Category::Travel),
            shopping: amount(Category::Shopping),
            miscellaneous: amount(Category::Miscellaneous),
            total: record.total.format_with_symbol(symbol),
            balance: record
                .balance()
                .map(|b| b.format_with_symbol(symbol))
                .unwrap_or_else(|| "-".to_string()),
            remarks: record.remarks.to_string(),
            saved_at: record
                .saved_at
                .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Format a list of records as a table, numbered from 1 in the given order
pub fn format_record_table(records: &[ExpenseRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, r)| RecordRow::new(i + 1, r, symbol));

    Table::new(rows).with(Style::psql()).to_string()
}

/// The message shown right after a record is saved
pub fn format_save_message(record: &ExpenseRecord, symbol: &str) -> String {
    let total = record.total.format_with_symbol(symbol);
    match record.remarks {
        Remarks::Overspent => format!("This month you overspent! Total: {}", total),
        Remarks::SavingsMade => format!("Savings made this month! Total: {}", total),
        Remarks::OverBudget => format!(
            "Over budget! Total: {} exceeds salary {}",
            total,
            record.salary.format_with_symbol(symbol)
        ),
        Remarks::WithinBudget => format!("Within budget this month. Total: {}", total),
    }
}
