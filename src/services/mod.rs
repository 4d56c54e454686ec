//! Service layer for the finance tracker
//!
//! The service layer sits between the command-line adapter and the store,
//! turning raw input into typed values and applying the configured defaults.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{CreateTransactionInput, SearchInput, TransactionService};
