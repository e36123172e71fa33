use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_clear_command, handle_export_command, handle_list_command, AddArgs,
    ExportArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::models::RemarksRule;
use expense_tracker::storage::{open_store, BackendKind};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Monthly expense tracker",
    long_about = "Record a month's salary and spending across fixed categories. \
                  Each entry is totalled and marked as overspent or saved, then \
                  stored in a local JSON file or SQLite database."
)]
struct Cli {
    /// Storage backend (overrides the configured one)
    #[arg(short, long, global = true, value_enum, env = "EXPENSE_TRACKER_BACKEND")]
    backend: Option<BackendKind>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a month's salary and expenses
    Add(AddArgs),

    /// List all records, newest first
    #[command(alias = "ls")]
    List,

    /// Export all records to a file
    Export(ExportArgs),

    /// Delete all records
    Clear {
        /// Skip the confirmation step
        #[arg(long)]
        force: bool,
    },

    /// Show or change configuration
    Config {
        /// Set the default storage backend
        #[arg(long, value_enum)]
        set_backend: Option<BackendKind>,

        /// Set the overspend rule for new records
        #[arg(long, value_enum)]
        set_rule: Option<RemarksRule>,

        /// Set the currency symbol used in terminal output
        #[arg(long)]
        set_currency: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(backend) = cli.backend {
        settings.backend = backend;
    }

    match cli.command {
        Some(Commands::Add(args)) => {
            let mut store = open_store(&settings.store_config(&paths));
            handle_add_command(&mut *store, &settings, args)?;
        }
        Some(Commands::List) => {
            let store = open_store(&settings.store_config(&paths));
            handle_list_command(&*store, &settings)?;
        }
        Some(Commands::Export(args)) => {
            let store = open_store(&settings.store_config(&paths));
            handle_export_command(&*store, args)?;
        }
        Some(Commands::Clear { force }) => {
            let mut store = open_store(&settings.store_config(&paths));
            handle_clear_command(&mut *store, &settings, force)?;
        }
        Some(Commands::Config {
            set_backend,
            set_rule,
            set_currency,
        }) => {
            let changed = set_backend.is_some() || set_rule.is_some() || set_currency.is_some();
            if let Some(backend) = set_backend {
                settings.backend = backend;
            }
            if let Some(rule) = set_rule {
                settings.remarks_rule = rule;
            }
            if let Some(symbol) = set_currency {
                settings.currency_symbol = symbol;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved to {}", paths.settings_file().display());
                println!();
            }

            let store_config = settings.store_config(&paths);
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Backend:        {}", settings.backend);
            println!("  Storage file:   {}", store_config.location().display());
            println!("  Overspend rule: {}", settings.remarks_rule);
            println!("  Currency:       {}", settings.currency_symbol);
        }
        None => {
            println!("Expense Tracker - monthly income and spending log");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add Oct-2025 --salary 50000 --food 8000' to record a month.");
        }
    }

    Ok(())
}
