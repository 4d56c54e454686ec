//! Monthly category budgets
//!
//! A budget caps expense spending in one category for one calendar month.
//! The store keeps at most one budget per (category, month) pair, comparing
//! categories case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::YearMonth;
use super::transaction::same_label;

/// A spending ceiling for a category in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub limit: Money,
    pub month: YearMonth,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: Money, month: YearMonth) -> Self {
        Self {
            category: category.into(),
            limit,
            month,
        }
    }

    /// Whether this budget occupies the same (category, month) slot
    pub fn covers(&self, category: &str, month: YearMonth) -> bool {
        self.month == month && same_label(&self.category, category)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.category, self.month, self.limit)
    }
}

/// How close a category is to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetStatusLevel {
    /// At or below 80% of the limit
    Ok,
    /// Above 80% and at most 100%
    Warning,
    /// Above 100%
    Exceeded,
}

impl BudgetStatusLevel {
    /// Classify spending against a limit
    ///
    /// Both thresholds are exclusive: exactly 80% is still `Ok` and exactly
    /// 100% is still `Warning`. A zero limit is `Exceeded` as soon as
    /// anything is spent.
    pub fn classify(spent: Money, limit: Money) -> Self {
        let spent = i128::from(spent.cents());
        let limit = i128::from(limit.cents());

        if spent > limit {
            Self::Exceeded
        } else if spent * 100 > limit * 80 {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Exceeded => "EXCEEDED",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Warning => "⚠",
            Self::Exceeded => "✗",
        }
    }
}

impl fmt::Display for BudgetStatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Spending against one budget for its month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    /// `None` when the limit is zero
    pub percentage: Option<f64>,
    pub level: BudgetStatusLevel,
}

impl BudgetStatus {
    pub fn new(category: impl Into<String>, spent: Money, limit: Money) -> Self {
        Self {
            category: category.into(),
            spent,
            limit,
            percentage: spent.percent_of(limit),
            level: BudgetStatusLevel::classify(spent, limit),
        }
    }

    /// Limit minus spent; negative once exceeded
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(spent_cents: i64, limit_cents: i64) -> BudgetStatusLevel {
        BudgetStatusLevel::classify(Money::from_cents(spent_cents), Money::from_cents(limit_cents))
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(level(79_00, 100_00), BudgetStatusLevel::Ok);
        assert_eq!(level(81_00, 100_00), BudgetStatusLevel::Warning);
        assert_eq!(level(101_00, 100_00), BudgetStatusLevel::Exceeded);
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        assert_eq!(level(80_00, 100_00), BudgetStatusLevel::Ok);
        assert_eq!(level(80_01, 100_00), BudgetStatusLevel::Warning);
        assert_eq!(level(100_00, 100_00), BudgetStatusLevel::Warning);
        assert_eq!(level(100_01, 100_00), BudgetStatusLevel::Exceeded);
    }

    #[test]
    fn test_zero_limit() {
        assert_eq!(level(0, 0), BudgetStatusLevel::Ok);
        assert_eq!(level(1, 0), BudgetStatusLevel::Exceeded);

        let status = BudgetStatus::new("Misc", Money::from_cents(1), Money::zero());
        assert_eq!(status.percentage, None);
    }

    #[test]
    fn test_status_row() {
        let status = BudgetStatus::new("Rent", Money::from_units(1200), Money::from_units(1000));
        assert_eq!(status.percentage, Some(120.0));
        assert_eq!(status.level, BudgetStatusLevel::Exceeded);
        assert_eq!(status.remaining(), Money::from_units(-200));
    }

    #[test]
    fn test_covers_is_case_insensitive() {
        let jan = YearMonth::new(2024, 1).unwrap();
        let budget = Budget::new("Groceries", Money::from_units(500), jan);
        assert!(budget.covers("groceries", jan));
        assert!(!budget.covers("groceries", jan.next()));
        assert!(!budget.covers("Grocery", jan));
    }

    #[test]
    fn test_budget_json() {
        let budget = Budget::new("Rent", Money::from_units(1000), YearMonth::new(2024, 1).unwrap());
        let json = serde_json::to_string(&budget).unwrap();
        assert_eq!(json, r#"{"category":"Rent","limit":1000.0,"month":"2024-01"}"#);
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, budget);
    }
}
