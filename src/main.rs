use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_tracker::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ReportCommands, TransactionCommands,
};
use finance_tracker::config::paths::{FinancePaths, DATA_DIR_ENV};
use finance_tracker::config::settings::Settings;
use finance_tracker::storage::Store;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Track income, expenses and monthly budgets from the command line",
    long_about = "Finance Tracker records income and expense transactions, keeps \
                  monthly spending limits per category, and reports totals by \
                  category, payment method and month."
)]
struct Cli {
    /// Directory holding config.json and the data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Summaries and breakdowns
    #[command(subcommand)]
    Report(ReportCommands),

    /// Create the data directory and a default config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings);
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            let store = Store::open(&paths)?;
            handle_transaction_command(&store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let store = Store::open(&paths)?;
            handle_budget_command(&store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let store = Store::open(&paths)?;
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Finance Tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'finance add income <amount>' to record your first transaction.");
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Recent limit:           {}", settings.recent_limit);
            println!("  Default category:       {}", settings.default_category);
            println!("  Default payment method: {}", settings.default_payment_method);
            println!("  Log level:              {}", settings.log_level);
        }
        None => {
            println!("Finance Tracker - income, expenses and budgets");
            println!();
            println!("Run 'finance --help' for usage information.");
        }
    }

    Ok(())
}
