//! Display formatting for terminal output
//!
//! Turns transactions, budgets and report data into the text the command
//! handlers print.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_status};
pub use transaction::{format_transaction_details, format_transaction_row, format_transaction_table};
