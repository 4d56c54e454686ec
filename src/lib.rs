//! Finance Tracker - personal income, expense and budget tracking
//!
//! This library provides the core functionality behind the `finance`
//! command. Transactions and monthly category budgets are kept in one
//! in-memory store, mirrored to JSON files, and rolled up into summaries,
//! grouped totals and budget status reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, money, months)
//! - `storage`: The locked store and its JSON file codec
//! - `reports`: Pure aggregation over transaction snapshots
//! - `services`: Input validation and defaults for the command line
//! - `cli`: Command handlers
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::paths::FinancePaths;
//! use finance_tracker::storage::Store;
//!
//! let paths = FinancePaths::new()?;
//! let store = Store::open(&paths)?;
//! let summary = store.get_summary()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
pub use storage::Store;
