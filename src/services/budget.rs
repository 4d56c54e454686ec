//! Budget service
//!
//! Parses budget input and resolves the month a command applies to.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetStatus, YearMonth};
use crate::storage::Store;

use super::transaction::parse_amount;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Set or replace the limit for a category in a month
    pub fn set(&self, category: &str, limit: &str, month: Option<&str>) -> FinanceResult<Budget> {
        let category = category.trim();
        if category.is_empty() {
            return Err(FinanceError::invalid("budget category cannot be empty"));
        }

        let limit = parse_amount(limit)?;
        let month = resolve_month(month)?;

        self.store.set_budget(category, limit, month)
    }

    /// All budgets, oldest first
    pub fn list(&self) -> FinanceResult<Vec<Budget>> {
        self.store.list_budgets()
    }

    /// Status of every budget in the month, plus the month itself
    pub fn status(&self, month: Option<&str>) -> FinanceResult<(YearMonth, Vec<BudgetStatus>)> {
        let month = resolve_month(month)?;
        Ok((month, self.store.get_budget_status(month)?))
    }
}

/// Parse a `YYYY-MM` month, defaulting to the current one
pub fn resolve_month(raw: Option<&str>) -> FinanceResult<YearMonth> {
    match raw {
        Some(raw) => parse_month(raw),
        None => Ok(YearMonth::current()),
    }
}

/// Parse a `YYYY-MM` month
pub fn parse_month(raw: &str) -> FinanceResult<YearMonth> {
    YearMonth::parse(raw.trim())
        .map_err(|e| FinanceError::invalid(format!("invalid month '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::models::{BudgetStatusLevel, Money};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::open(&paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_set_and_list() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);

        let budget = service.set("Rent", "1000", Some("2024-01")).unwrap();
        assert_eq!(budget.limit, Money::from_units(1000));
        assert_eq!(budget.month, YearMonth::new(2024, 1).unwrap());
        assert_eq!(service.list().unwrap(), vec![budget]);
    }

    #[test]
    fn test_set_defaults_to_current_month() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);

        let budget = service.set("Food", "300", None).unwrap();
        assert_eq!(budget.month, YearMonth::current());
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);

        assert!(service.set("Rent", "0", None).unwrap_err().is_invalid_argument());
        assert!(service.set("Rent", "-10", None).unwrap_err().is_invalid_argument());
        assert!(service.set("Rent", "ten", None).unwrap_err().is_invalid_argument());
        assert!(service.set("  ", "10", None).unwrap_err().is_invalid_argument());
        assert!(service
            .set("Rent", "10", Some("2024-13"))
            .unwrap_err()
            .is_invalid_argument());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_status_for_month() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        service.set("Rent", "1000", Some("2024-01")).unwrap();

        let (month, statuses) = service.status(Some("2024-01")).unwrap();
        assert_eq!(month.to_string(), "2024-01");
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].level, BudgetStatusLevel::Ok);

        let (_, empty) = service.status(Some("2024-02")).unwrap();
        assert!(empty.is_empty());
    }
}
