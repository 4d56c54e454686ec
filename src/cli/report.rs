//! CLI commands for reports

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::{
    format_distribution, format_month_report, format_monthly, format_summary, format_totals,
};
use crate::error::FinanceResult;
use crate::reports;
use crate::services::budget::parse_month;
use crate::storage::Store;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total income, expense and balance
    Summary,

    /// Totals per category
    Category,

    /// Totals per payment method
    #[command(alias = "method")]
    Payment,

    /// Income, expense and net for every month
    Monthly,

    /// Totals for one month
    Month {
        /// Month (YYYY-MM)
        month: String,
    },

    /// Share of expense per category
    Analysis,
}

/// Handle report commands
pub fn handle_report_command(
    store: &Store,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    let output = match cmd {
        ReportCommands::Summary => format_summary(&store.get_summary()?, symbol),
        ReportCommands::Category => {
            let transactions = store.list_transactions()?;
            format_totals(
                "CATEGORY REPORT",
                &reports::by_category(&transactions),
                symbol,
            )
        }
        ReportCommands::Payment => {
            let transactions = store.list_transactions()?;
            format_totals(
                "PAYMENT METHOD REPORT",
                &reports::by_payment_method(&transactions),
                symbol,
            )
        }
        ReportCommands::Monthly => format_monthly(&store.get_monthly_summaries()?, symbol),
        ReportCommands::Month { month } => {
            let month = parse_month(&month)?;
            let transactions = reports::in_month(&store.list_transactions()?, month);
            format_month_report(month, &reports::summarize(&transactions), symbol)
        }
        ReportCommands::Analysis => {
            let transactions = store.list_transactions()?;
            format_distribution(&reports::expense_distribution(&transactions), symbol)
        }
    };

    print!("{}", output);
    Ok(())
}
