//! Core data models for the finance tracker
//!
//! Transactions and budgets are the two persisted record types; summaries and
//! budget statuses are derived from them on demand.

pub mod budget;
pub mod filter;
pub mod ids;
pub mod money;
pub mod month;
pub mod summary;
pub mod transaction;

pub use budget::{Budget, BudgetStatus, BudgetStatusLevel};
pub use filter::TransactionFilter;
pub use ids::TransactionId;
pub use money::Money;
pub use month::YearMonth;
pub use summary::{GroupTotals, Summary};
pub use transaction::{NewTransaction, Transaction, TransactionType};
