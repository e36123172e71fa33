//! Expense CLI commands
//!
//! Implements adding, listing and clearing expense records.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_record_table, format_save_message};
use crate::error::ExpenseResult;
use crate::models::ExpenseForm;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Arguments for recording a month's expenses
///
/// Amounts accept currency symbols and thousands separators ("₹1,200");
/// categories left out count as zero.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Month label (e.g., "Oct-2025")
    pub month: String,

    /// Monthly salary
    #[arg(short, long, allow_hyphen_values = true)]
    pub salary: String,

    /// Electricity bill
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub electricity: String,

    /// Water bill
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub water: String,

    /// Gas cylinder
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub gas: String,

    /// Food
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub food: String,

    /// Travel
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub travel: String,

    /// Shopping
    #[arg(short = 'p', long, default_value = "", allow_hyphen_values = true)]
    pub shopping: String,

    /// Miscellaneous
    #[arg(short, long = "misc", alias = "miscellaneous", default_value = "", allow_hyphen_values = true)]
    pub miscellaneous: String,
}

impl From<AddArgs> for ExpenseForm {
    fn from(args: AddArgs) -> Self {
        ExpenseForm {
            month: args.month,
            salary: args.salary,
            electricity: args.electricity,
            water: args.water,
            gas: args.gas,
            food: args.food,
            travel: args.travel,
            shopping: args.shopping,
            miscellaneous: args.miscellaneous,
        }
    }
}

/// Handle `add`
pub fn handle_add_command(
    store: &mut dyn ExpenseStore,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let mut service = ExpenseService::new(store, settings.remarks_rule);
    let record = service.record(args.into())?;

    println!("Saved expenses for {}", record.month);
    println!("{}", format_save_message(&record, &settings.currency_symbol));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(store: &dyn ExpenseStore, settings: &Settings) -> ExpenseResult<()> {
    let records = store.list_all()?;

    println!("{}", format_record_table(&records, &settings.currency_symbol));
    if !records.is_empty() {
        println!("{} record(s), newest first", records.len());
    }
    Ok(())
}

/// Handle `clear`
///
/// Nothing is deleted unless `force` is set.
pub fn handle_clear_command(
    store: &mut dyn ExpenseStore,
    settings: &Settings,
    force: bool,
) -> ExpenseResult<()> {
    let mut service = ExpenseService::new(store, settings.remarks_rule);

    if !force {
        let count = service.list()?.len();
        println!("This will permanently delete all {} saved record(s).", count);
        println!("To proceed, run again with --force flag:");
        println!("  expense clear --force");
        return Ok(());
    }

    let count = service.clear()?;
    println!("All records deleted ({} removed).", count);
    Ok(())
}
