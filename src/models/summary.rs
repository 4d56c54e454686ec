//! Derived totals over a set of transactions
//!
//! Nothing here is persisted. A `Summary` is rebuilt from a snapshot every
//! time it is asked for.

use serde::Serialize;
use std::collections::HashMap;

use super::money::Money;

/// Running totals keyed by a label, remembering first-seen key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTotals {
    entries: Vec<(String, Money)>,
    index: HashMap<String, usize>,
}

impl GroupTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the total for `key`, creating it if needed
    pub fn add(&mut self, key: &str, amount: Money) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<Money> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every group
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, m)| *m).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(k, m)| (k.as_str(), *m))
    }

    /// Entries by descending total; ties keep first-seen order
    pub fn sorted_desc(&self) -> Vec<(&str, Money)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl Serialize for GroupTotals {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Income, expense, balance and per-category totals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`; negative when overspent
    pub balance: Money,
    /// Spans both income and expense transactions
    pub category_totals: GroupTotals,
}

impl Summary {
    pub fn new(total_income: Money, total_expense: Money, category_totals: GroupTotals) -> Self {
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            category_totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_totals.is_empty()
    }
}
