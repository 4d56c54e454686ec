//! Transaction search criteria

use chrono::NaiveDate;

use super::money::Money;
use super::transaction::{Transaction, TransactionType};

/// Options for filtering transactions; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive exact category
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
    /// Inclusive start date
    pub start_date: Option<NaiveDate>,
    /// Inclusive end date
    pub end_date: Option<NaiveDate>,
    /// Inclusive lower bound on amount
    pub min_amount: Option<Money>,
    /// Inclusive upper bound on amount
    pub max_amount: Option<Money>,
    /// Substring searched in the raw tag string
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn amount_range(mut self, min: Money, max: Money) -> Self {
        self.min_amount = Some(min);
        self.max_amount = Some(max);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single transaction against every set criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if !txn.in_category(category) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if self.start_date.is_some_and(|start| txn.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| txn.date > end) {
            return false;
        }
        if self.min_amount.is_some_and(|min| txn.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| txn.amount > max) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !txn.has_tag(tag) {
                return false;
            }
        }
        true
    }

    /// Filter a snapshot, keeping its order, then apply the limit
    pub fn apply(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        let matched = transactions.into_iter().filter(|t| self.matches(t));
        match self.limit {
            Some(limit) => matched.take(limit).collect(),
            None => matched.collect(),
        }
    }
}
