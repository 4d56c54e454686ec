//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::storage::Store;

/// Retry a failed save once and tell the user if it still did not stick
pub fn report_unsaved(store: &Store) {
    if !store.is_dirty().unwrap_or(false) {
        return;
    }

    if let Err(e) = store.flush() {
        tracing::error!(error = %e, "flush after failed save also failed");
        eprintln!("✗ Warning: changes not saved to disk ({})", e);
    }
}
