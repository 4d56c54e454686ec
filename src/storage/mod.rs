//! Storage layer for the finance tracker
//!
//! [`Store`] owns every transaction and budget in memory behind a single
//! reader/writer lock and mirrors each collection to its own JSON file.
//! Mutations write through to disk before releasing the lock; reads copy a
//! snapshot out and aggregate it with the lock already released.

pub mod codec;
pub mod file_io;

pub use codec::JsonCollection;
pub use file_io::{read_json, write_json_atomic};

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::paths::FinancePaths;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Budget, BudgetStatus, Money, NewTransaction, Summary, Transaction, TransactionFilter,
    TransactionId, YearMonth,
};
use crate::reports::aggregate;

/// Everything guarded by the store lock
#[derive(Debug, Default)]
struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    /// Ids of deleted transactions, never handed out again
    retired_ids: HashSet<TransactionId>,
    transactions_unsaved: bool,
    budgets_unsaved: bool,
    retired_unsaved: bool,
}

impl Ledger {
    fn id_in_use(&self, id: &TransactionId) -> bool {
        self.retired_ids.contains(id) || self.transactions.iter().any(|t| &t.id == id)
    }

    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::new();
            if !self.id_in_use(&id) {
                return id;
            }
        }
    }

    fn sorted_retired_ids(&self) -> Vec<TransactionId> {
        let mut ids: Vec<_> = self.retired_ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

fn valid_amount(amount: Money) -> bool {
    !amount.is_negative() && amount.within_max()
}

/// Drop loaded records that a mutation could never have produced
fn keep_valid<T>(items: Vec<T>, what: &str, is_valid: impl Fn(&T) -> bool) -> Vec<T> {
    let total = items.len();
    let kept: Vec<T> = items.into_iter().filter(|item| is_valid(item)).collect();
    if kept.len() < total {
        tracing::warn!(
            skipped = total - kept.len(),
            "ignoring {} with an amount out of range",
            what
        );
    }
    kept
}

/// The shared transaction and budget store
pub struct Store {
    transactions_file: JsonCollection<Transaction>,
    budgets_file: JsonCollection<Budget>,
    retired_file: JsonCollection<TransactionId>,
    ledger: RwLock<Ledger>,
}

impl Store {
    /// Open the store under the configured data directory
    pub fn open(paths: &FinancePaths) -> FinanceResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::with_files(
            paths.transactions_file(),
            paths.budgets_file(),
            paths.retired_ids_file(),
        ))
    }

    /// Open the store on explicit file paths, loading whatever is there
    pub fn with_files(
        transactions_path: PathBuf,
        budgets_path: PathBuf,
        retired_ids_path: PathBuf,
    ) -> Self {
        let transactions_file = JsonCollection::new(transactions_path);
        let budgets_file = JsonCollection::new(budgets_path);
        let retired_file = JsonCollection::new(retired_ids_path);

        let ledger = Ledger {
            transactions: keep_valid(transactions_file.load(), "transactions", |t| {
                valid_amount(t.amount)
            }),
            budgets: keep_valid(budgets_file.load(), "budgets", |b| {
                b.limit.is_positive() && valid_amount(b.limit)
            }),
            retired_ids: retired_file.load().into_iter().collect(),
            ..Ledger::default()
        };
        tracing::info!(
            transactions = ledger.transactions.len(),
            budgets = ledger.budgets.len(),
            "store opened"
        );

        Self {
            transactions_file,
            budgets_file,
            retired_file,
            ledger: RwLock::new(ledger),
        }
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, Ledger>> {
        self.ledger
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, Ledger>> {
        self.ledger
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn persist_transactions(&self, ledger: &mut Ledger) {
        match self.transactions_file.save(&ledger.transactions) {
            Ok(()) => ledger.transactions_unsaved = false,
            Err(e) => {
                tracing::error!(error = %e, "transactions not saved, keeping changes in memory");
                ledger.transactions_unsaved = true;
            }
        }
    }

    fn persist_budgets(&self, ledger: &mut Ledger) {
        match self.budgets_file.save(&ledger.budgets) {
            Ok(()) => ledger.budgets_unsaved = false,
            Err(e) => {
                tracing::error!(error = %e, "budgets not saved, keeping changes in memory");
                ledger.budgets_unsaved = true;
            }
        }
    }

    fn persist_retired(&self, ledger: &mut Ledger) {
        match self.retired_file.save(&ledger.sorted_retired_ids()) {
            Ok(()) => ledger.retired_unsaved = false,
            Err(e) => {
                tracing::error!(error = %e, "retired ids not saved, keeping them in memory");
                ledger.retired_unsaved = true;
            }
        }
    }

    /// Record a new transaction and write the transaction file
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a negative amount or one above [`Money::MAX`].
    /// A failed file write is logged and leaves the store dirty; it does not
    /// fail the call.
    pub fn add_transaction(&self, new: NewTransaction) -> FinanceResult<Transaction> {
        if new.amount.is_negative() {
            return Err(FinanceError::invalid(format!(
                "amount cannot be negative: {}",
                new.amount
            )));
        }
        if !new.amount.within_max() {
            return Err(FinanceError::invalid(format!(
                "amount exceeds the maximum of {}: {}",
                Money::MAX,
                new.amount
            )));
        }

        let mut ledger = self.write()?;
        let txn = new.into_transaction(ledger.fresh_id());
        ledger.transactions.push(txn.clone());
        self.persist_transactions(&mut ledger);

        tracing::debug!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction added");
        Ok(txn)
    }

    /// Remove the transaction with `id`; `false` if there was none
    pub fn delete_transaction(&self, id: &TransactionId) -> FinanceResult<bool> {
        let mut ledger = self.write()?;
        let Some(pos) = ledger.transactions.iter().position(|t| &t.id == id) else {
            return Ok(false);
        };

        ledger.transactions.remove(pos);
        ledger.retired_ids.insert(id.clone());
        self.persist_transactions(&mut ledger);
        self.persist_retired(&mut ledger);

        tracing::debug!(id = %id, "transaction deleted");
        Ok(true)
    }

    /// Set the limit for `category` in `month`, replacing any existing budget
    /// for the same category (compared case-insensitively) and month
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `limit` is positive and at most [`Money::MAX`].
    pub fn set_budget(
        &self,
        category: &str,
        limit: Money,
        month: YearMonth,
    ) -> FinanceResult<Budget> {
        if !limit.is_positive() {
            return Err(FinanceError::invalid(format!(
                "budget limit must be positive: {}",
                limit
            )));
        }
        if !limit.within_max() {
            return Err(FinanceError::invalid(format!(
                "budget limit exceeds the maximum of {}: {}",
                Money::MAX,
                limit
            )));
        }

        let budget = Budget::new(category, limit, month);

        let mut ledger = self.write()?;
        ledger.budgets.retain(|b| !b.covers(category, month));
        ledger.budgets.push(budget.clone());
        self.persist_budgets(&mut ledger);

        tracing::debug!(category, %month, %limit, "budget set");
        Ok(budget)
    }

    /// All transactions in insertion order
    pub fn list_transactions(&self) -> FinanceResult<Vec<Transaction>> {
        Ok(self.read()?.transactions.clone())
    }

    /// Latest transactions first, at most `limit` of them
    pub fn recent_transactions(&self, limit: usize) -> FinanceResult<Vec<Transaction>> {
        let mut transactions = self.list_transactions()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.truncate(limit);
        Ok(transactions)
    }

    /// All budgets in insertion order
    pub fn list_budgets(&self) -> FinanceResult<Vec<Budget>> {
        Ok(self.read()?.budgets.clone())
    }

    pub fn get_transaction(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        Ok(self
            .read()?
            .transactions
            .iter()
            .find(|t| &t.id == id)
            .cloned())
    }

    /// Transactions matching `filter`, in insertion order
    pub fn search(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        Ok(filter.apply(self.list_transactions()?))
    }

    pub fn get_summary(&self) -> FinanceResult<Summary> {
        let transactions = self.list_transactions()?;
        Ok(aggregate::summarize(&transactions))
    }

    /// One summary per month that has transactions
    pub fn get_monthly_summaries(&self) -> FinanceResult<BTreeMap<YearMonth, Summary>> {
        let transactions = self.list_transactions()?;
        Ok(aggregate::monthly_summaries(&transactions))
    }

    /// Spending against every budget set for `month`
    pub fn get_budget_status(&self, month: YearMonth) -> FinanceResult<Vec<BudgetStatus>> {
        let (transactions, budgets) = {
            let ledger = self.read()?;
            (ledger.transactions.clone(), ledger.budgets.clone())
        };
        Ok(aggregate::budget_status(&transactions, &budgets, month))
    }

    /// Whether some change has not reached disk
    pub fn is_dirty(&self) -> FinanceResult<bool> {
        let ledger = self.read()?;
        Ok(ledger.transactions_unsaved || ledger.budgets_unsaved || ledger.retired_unsaved)
    }

    /// Retry writing every file whose last save failed
    ///
    /// Each file is attempted even when an earlier one fails; the first
    /// error is returned.
    pub fn flush(&self) -> FinanceResult<()> {
        let mut ledger = self.write()?;
        let mut first_error = None;

        if ledger.transactions_unsaved {
            match self.transactions_file.save(&ledger.transactions) {
                Ok(()) => ledger.transactions_unsaved = false,
                Err(e) => first_error = first_error.or(Some(e)),
            }
        }
        if ledger.budgets_unsaved {
            match self.budgets_file.save(&ledger.budgets) {
                Ok(()) => ledger.budgets_unsaved = false,
                Err(e) => first_error = first_error.or(Some(e)),
            }
        }
        if ledger.retired_unsaved {
            match self.retired_file.save(&ledger.sorted_retired_ids()) {
                Ok(()) => ledger.retired_unsaved = false,
                Err(e) => first_error = first_error.or(Some(e)),
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
