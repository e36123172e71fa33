//! Expense record model
//!
//! One month's income and spending, with its derived total and verdict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryAmounts};
use super::money::Money;
use super::remarks::{Remarks, RemarksRule};
use crate::error::{ExpenseError, ExpenseResult};

/// A persisted monthly expense entry
///
/// `total` and `remarks` are derived once in [`ExpenseRecord::new`] and never
/// recomputed. `saved_at` is assigned by the store on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub month: String,
    pub salary: Money,
    #[serde(flatten)]
    pub amounts: CategoryAmounts,
    pub total: Money,
    pub remarks: Remarks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl ExpenseRecord {
    /// Build a record from typed amounts, classifying it under `rule`
    pub fn new(
        month: impl Into<String>,
        salary: Money,
        amounts: CategoryAmounts,
        rule: RemarksRule,
    ) -> ExpenseResult<Self> {
        let month = month.into().trim().to_string();
        if month.is_empty() {
            return Err(ExpenseError::InvalidInput(
                "month is required (e.g. Oct-2025)".into(),
            ));
        }

        if salary.is_negative() {
            return Err(ExpenseError::invalid_amount(
                "salary",
                salary.to_string(),
                "must not be negative",
            ));
        }
        if let Some((category, amount)) = amounts.iter().find(|(_, a)| a.is_negative()) {
            return Err(ExpenseError::invalid_amount(
                category.field_name(),
                amount.to_string(),
                "must not be negative",
            ));
        }

        let total = amounts.total()?;
        Ok(Self {
            month,
            salary,
            amounts,
            total,
            remarks: rule.classify(total, salary),
            saved_at: None,
        })
    }

    /// Amount spent in a category
    pub fn amount(&self, category: Category) -> Money {
        self.amounts.get(category)
    }

    /// Salary left after spending (negative when overspent past salary)
    ///
    /// `None` when the difference does not fit, which only a hand-edited
    /// record can produce.
    pub fn balance(&self) -> Option<Money> {
        self.salary.checked_sub(self.total)
    }

    /// Return a copy stamped with the given save time
    pub fn stamped(&self, saved_at: DateTime<Utc>) -> Self {
        Self {
            saved_at: Some(saved_at),
            ..self.clone()
        }
    }
}

/// Raw text as typed into the expense form
///
/// Blank amounts count as zero.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub month: String,
    pub salary: String,
    pub electricity: String,
    pub water: String,
    pub gas: String,
    pub food: String,
    pub travel: String,
    pub shopping: String,
    pub miscellaneous: String,
}

impl ExpenseForm {
    /// Create a form for a month and salary with all categories blank
    pub fn new(month: impl Into<String>, salary: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            salary: salary.into(),
            ..Self::default()
        }
    }

    /// Set the text for one category
    pub fn with(mut self, category: Category, text: impl Into<String>) -> Self {
        *self.field_mut(category) = text.into();
        self
    }

    fn field(&self, category: Category) -> &str {
        match category {
            Category::Electricity => &self.electricity,
            Category::Water => &self.water,
            Category::Gas => &self.gas,
            Category::Food => &self.food,
            Category::Travel => &self.travel,
            Category::Shopping => &self.shopping,
            Category::Miscellaneous => &self.miscellaneous,
        }
    }

    fn field_mut(&mut self, category: Category) -> &mut String {
        match category {
            Category::Electricity => &mut self.electricity,
            Category::Water => &mut self.water,
            Category::Gas => &mut self.gas,
            Category::Food => &mut self.food,
            Category::Travel => &mut self.travel,
            Category::Shopping => &mut self.shopping,
            Category::Miscellaneous => &mut self.miscellaneous,
        }
    }

    /// Parse every field and build the record
    ///
    /// Fails with `InvalidInput` for a blank month and `InvalidAmount` naming
    /// the first field whose text is not a non-negative number.
    pub fn into_record(self, rule: RemarksRule) -> ExpenseResult<ExpenseRecord> {
        if self.month.trim().is_empty() {
            return Err(ExpenseError::InvalidInput(
                "month is required (e.g. Oct-2025)".into(),
            ));
        }

        let salary = parse_amount("salary", &self.salary)?;

        let mut amounts = CategoryAmounts::default();
        for category in Category::ALL {
            let amount = parse_amount(category.field_name(), self.field(category))?;
            amounts.set(category, amount);
        }

        ExpenseRecord::new(self.month, salary, amounts, rule)
    }
}

fn parse_amount(field: &'static str, text: &str) -> ExpenseResult<Money> {
    Money::parse(text).map_err(|e| ExpenseError::invalid_amount(field, text, e.reason()))
}
