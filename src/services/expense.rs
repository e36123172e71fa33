//! Expense service
//!
//! Turns a filled-in expense form into a stored record.

use crate::error::ExpenseResult;
use crate::models::{ExpenseForm, ExpenseRecord, RemarksRule};
use crate::storage::ExpenseStore;

/// Service for recording and listing monthly expenses
pub struct ExpenseService<'a> {
    store: &'a mut dyn ExpenseStore,
    rule: RemarksRule,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service classifying records under `rule`
    pub fn new(store: &'a mut dyn ExpenseStore, rule: RemarksRule) -> Self {
        Self { store, rule }
    }

    /// The rule applied to new records
    pub fn rule(&self) -> RemarksRule {
        self.rule
    }

    /// Parse the form, classify it and persist the record
    ///
    /// Validation happens before the store is touched, so a bad form never
    /// affects stored records.
    pub fn record(&mut self, form: ExpenseForm) -> ExpenseResult<ExpenseRecord> {
        let record = form.into_record(self.rule)?;
        self.store.append(record)
    }

    /// All records, most recent first
    pub fn list(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.store.list_all()
    }

    /// Delete every stored record, returning how many there were
    pub fn clear(&mut self) -> ExpenseResult<usize> {
        let count = self.store.list_all()?.len();
        self.store.clear_all()?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Category, Money, Remarks};
    use crate::storage::{JsonFileStore, SqliteStore};
    use tempfile::TempDir;

    fn november_form() -> ExpenseForm {
        ExpenseForm::new("Nov-2025", "5000")
            .with(Category::Electricity, "")
            .with(Category::Water, "0")
            .with(Category::Gas, "200")
            .with(Category::Food, "1000")
    }

    #[test]
    fn test_record_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(temp_dir.path().join("records.json"));
        let mut service = ExpenseService::new(&mut store, RemarksRule::SavingsMargin);

        let saved = service.record(november_form()).unwrap();
        assert_eq!(saved.total, Money::from_units(1200, 0));
        assert_eq!(saved.remarks, Remarks::SavingsMade);

        let all = service.list().unwrap();
        assert_eq!(all[0], saved);
    }

    #[test]
    fn test_bad_amount_leaves_store_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = SqliteStore::open(temp_dir.path().join("expenses.db"));
        let mut service = ExpenseService::new(&mut store, RemarksRule::SavingsMargin);

        service.record(november_form()).unwrap();
        let before = service.list().unwrap();

        let err = service
            .record(november_form().with(Category::Travel, "abc"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAmount);
        assert_eq!(err.field(), Some("travel"));

        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_configured_rule_is_used() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(temp_dir.path().join("records.json"));
        let mut service = ExpenseService::new(&mut store, RemarksRule::StrictBudget);
        assert_eq!(service.rule(), RemarksRule::StrictBudget);

        let saved = service
            .record(ExpenseForm::new("Oct-2025", "1000").with(Category::Shopping, "1001"))
            .unwrap();
        assert_eq!(saved.remarks, Remarks::OverBudget);
    }

    #[test]
    fn test_clear_reports_count() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(temp_dir.path().join("records.json"));
        let mut service = ExpenseService::new(&mut store, RemarksRule::SavingsMargin);

        service.record(november_form()).unwrap();
        service.record(november_form()).unwrap();

        assert_eq!(service.clear().unwrap(), 2);
        assert!(service.list().unwrap().is_empty());
        assert_eq!(service.clear().unwrap(), 0);
    }
}
