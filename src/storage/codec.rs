//! JSON codec for one persisted collection
//!
//! Each collection lives in its own file as a pretty-printed JSON array.
//! Saving always rewrites the whole array. Loading never fails startup: a
//! missing file is an empty collection, and an unreadable one is logged and
//! treated as empty.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinanceResult;

use super::file_io::{read_json, write_json_atomic};

/// File-backed array of `T`
#[derive(Debug, Clone)]
pub struct JsonCollection<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, degrading to empty on any problem
    pub fn load(&self) -> Vec<T> {
        match self.try_load() {
            Ok(items) => {
                tracing::debug!(path = %self.path.display(), count = items.len(), "loaded collection");
                items
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not read collection, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Load the collection, reporting parse and I/O failures
    pub fn try_load(&self) -> FinanceResult<Vec<T>> {
        // `null` is what an interrupted legacy writer could leave behind
        let items: Option<Vec<T>> = read_json(&self.path)?;
        Ok(items.unwrap_or_default())
    }

    /// Replace the file contents with `items`
    pub fn save(&self, items: &[T]) -> FinanceResult<()> {
        write_json_atomic(&self.path, items)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money, NewTransaction, Transaction, TransactionType, YearMonth};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn transactions() -> Vec<Transaction> {
        vec![
            NewTransaction::new(
                TransactionType::Income,
                Money::from_units(5000),
                "Salary",
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            )
            .payment_method("Bank Transfer")
            .into_transaction(Default::default()),
            NewTransaction::new(
                TransactionType::Expense,
                Money::from_cents(120_055),
                "Rent",
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            )
            .description("flat")
            .recurring(true)
            .tags("home,fixed")
            .into_transaction(Default::default()),
        ]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let codec: JsonCollection<Transaction> =
            JsonCollection::new(temp_dir.path().join("transactions.json"));

        assert!(codec.load().is_empty());
        assert!(codec.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_transactions_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let codec = JsonCollection::new(temp_dir.path().join("transactions.json"));

        let items = transactions();
        codec.save(&items).unwrap();

        assert_eq!(codec.load(), items);
    }

    #[test]
    fn test_budgets_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let codec = JsonCollection::new(temp_dir.path().join("budgets.json"));

        let jan = YearMonth::new(2024, 1).unwrap();
        let items = vec![
            Budget::new("Rent", Money::from_units(1000), jan),
            Budget::new("Food", Money::from_cents(45_050), jan.next()),
        ];
        codec.save(&items).unwrap();

        assert_eq!(codec.load(), items);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        fs::write(&path, "[{\"id\": ").unwrap();

        let codec: JsonCollection<Transaction> = JsonCollection::new(path);
        assert!(codec.load().is_empty());
        assert!(codec.try_load().unwrap_err().is_persistence());
    }

    #[test]
    fn test_null_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        fs::write(&path, "null").unwrap();

        let codec: JsonCollection<Budget> = JsonCollection::new(path);
        assert!(codec.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_file_is_a_plain_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let codec = JsonCollection::new(path.clone());
        codec.save(&transactions()).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let array = raw.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["amount"], 1200.55);
        assert_eq!(array[1]["date"], "2024-01-15");
    }
}
