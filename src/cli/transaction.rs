//! Transaction CLI commands
//!
//! Implements the commands that record, list, search and delete transactions.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionType;
use crate::services::{CreateTransactionInput, SearchInput, TransactionService};
use crate::storage::Store;

use super::report_unsaved;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or an expense
    Add {
        /// income or expense
        kind: TransactionType,
        /// Amount (e.g., "50", "49.99", "1,200")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method: a name, or 1 Cash, 2 Card, 3 UPI, 4 Bank Transfer
        #[arg(short, long)]
        method: Option<String>,
        /// Mark as recurring
        #[arg(short, long)]
        recurring: bool,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// List transactions, latest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every transaction
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },
    /// Search transactions
    Search {
        /// Category name (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Minimum amount, inclusive
        #[arg(long)]
        min: Option<String>,
        /// Maximum amount, inclusive
        #[arg(long)]
        max: Option<String>,
        /// Text to look for in the tags
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &Store,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(store, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
            method,
            recurring,
            tags,
        } => {
            let input = CreateTransactionInput {
                amount,
                category,
                description,
                date,
                payment_method: method,
                recurring,
                tags,
            };

            let txn = service.create(kind, input)?;
            println!(
                "✓ {} added successfully! ID: {}",
                txn.kind.as_str().to_uppercase(),
                txn.id
            );
            report_unsaved(store);
        }

        TransactionCommands::List { limit, all } => {
            let limit = if all {
                None
            } else {
                Some(limit.unwrap_or(settings.recent_limit))
            };
            let transactions = service.recent(limit)?;
            print!("{}", format_transaction_table(&transactions, symbol));
        }

        TransactionCommands::Search {
            category,
            from,
            to,
            min,
            max,
            tag,
        } => {
            let results = service.search(SearchInput {
                category,
                from,
                to,
                min,
                max,
                tag,
            })?;

            if results.is_empty() {
                println!("No transactions found.");
            } else {
                println!("Search Results ({}):", results.len());
                print!("{}", format_transaction_table(&results, symbol));
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinanceError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!("✓ Deleted transaction {}", txn);
            report_unsaved(store);
        }
    }

    Ok(())
}
