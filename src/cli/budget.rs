//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_budget_status};
use crate::error::FinanceResult;
use crate::services::BudgetService;
use crate::storage::Store;

use super::report_unsaved;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "1000" or "450.50")
        #[arg(allow_hyphen_values = true)]
        limit: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List every budget
    List,

    /// Show spending against each budget
    Status {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            month,
        } => {
            let budget = service.set(&category, &limit, month.as_deref())?;
            println!(
                "✓ Budget set: {} for {} is {}",
                budget.category,
                budget.month,
                budget.limit.format_with_symbol(symbol)
            );
            report_unsaved(store);
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(&service.list()?, symbol));
        }

        BudgetCommands::Status { month } => {
            let (month, statuses) = service.status(month.as_deref())?;
            print!("{}", format_budget_status(month, &statuses, symbol));
        }
    }

    Ok(())
}
