//! Reports module for the finance tracker
//!
//! Summaries, grouped totals, monthly rollups and budget status, all
//! computed from snapshots handed out by the store.

pub mod aggregate;

pub use aggregate::{
    budget_status, by_category, by_month, by_payment_method, expense_distribution, group_sum,
    in_month, monthly_summaries, sum_by_type, summarize, CategoryShare,
};
