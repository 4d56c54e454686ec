//! Transaction service
//!
//! Validates raw command-line input, fills in defaults from the settings and
//! hands typed values to the store.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Money, NewTransaction, Transaction, TransactionFilter, TransactionId, TransactionType,
};
use crate::storage::Store;

/// Payment methods offered by number, in menu order
pub const PAYMENT_METHODS: [&str; 4] = ["Cash", "Card", "UPI", "Bank Transfer"];

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a Store,
    settings: &'a Settings,
}

/// Input for creating a new transaction, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct CreateTransactionInput {
    pub amount: String,
    pub category: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`; today when absent
    pub date: Option<String>,
    /// A method name, or its number in [`PAYMENT_METHODS`]
    pub payment_method: Option<String>,
    pub recurring: bool,
    pub tags: Option<String>,
}

/// Raw search criteria; each one is optional
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub category: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub tag: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a Store, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Create a new income or expense
    pub fn create(
        &self,
        kind: TransactionType,
        input: CreateTransactionInput,
    ) -> FinanceResult<Transaction> {
        let amount = parse_amount(&input.amount)?;
        if !amount.is_positive() {
            return Err(FinanceError::invalid(format!(
                "amount must be greater than zero: '{}'",
                input.amount
            )));
        }

        let date = match input.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => chrono::Local::now().date_naive(),
        };

        let category = non_blank(input.category)
            .unwrap_or_else(|| self.settings.default_category.clone());

        let payment_method = match non_blank(input.payment_method) {
            Some(raw) => resolve_payment_method(&raw),
            None => self.settings.default_payment_method.clone(),
        };

        let new = NewTransaction::new(kind, amount, category, date)
            .description(input.description.unwrap_or_default().trim())
            .payment_method(payment_method)
            .recurring(input.recurring)
            .tags(input.tags.unwrap_or_default().trim());

        self.store.add_transaction(new)
    }

    /// Find a transaction by its id as typed
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        match identifier.parse::<TransactionId>() {
            Ok(id) => self.store.get_transaction(&id),
            Err(_) => Ok(None),
        }
    }

    /// Delete a transaction, returning what was removed
    ///
    /// # Errors
    ///
    /// `NotFound` when no transaction has that id.
    pub fn delete(&self, identifier: &str) -> FinanceResult<Transaction> {
        let not_found = || FinanceError::transaction_not_found(identifier.trim());

        let id: TransactionId = identifier.parse().map_err(|_| not_found())?;
        let txn = self.store.get_transaction(&id)?.ok_or_else(not_found)?;

        if self.store.delete_transaction(&id)? {
            Ok(txn)
        } else {
            Err(not_found())
        }
    }

    /// Latest transactions first; `None` shows everything
    pub fn recent(&self, limit: Option<usize>) -> FinanceResult<Vec<Transaction>> {
        self.store.recent_transactions(limit.unwrap_or(usize::MAX))
    }

    /// Search with criteria parsed from raw input
    pub fn search(&self, input: SearchInput) -> FinanceResult<Vec<Transaction>> {
        let filter = build_filter(input)?;
        self.store.search(&filter)
    }
}

/// Turn raw search input into a filter
pub fn build_filter(input: SearchInput) -> FinanceResult<TransactionFilter> {
    let mut filter = TransactionFilter::new();

    if let Some(category) = non_blank(input.category) {
        filter = filter.category(category);
    }
    if let Some(raw) = input.from.as_deref() {
        filter.start_date = Some(parse_date(raw)?);
    }
    if let Some(raw) = input.to.as_deref() {
        filter.end_date = Some(parse_date(raw)?);
    }
    if let Some(raw) = input.min.as_deref() {
        filter.min_amount = Some(parse_amount(raw)?);
    }
    if let Some(raw) = input.max.as_deref() {
        filter.max_amount = Some(parse_amount(raw)?);
    }
    if let Some(tag) = non_blank(input.tag) {
        filter = filter.tag(tag);
    }

    Ok(filter)
}

/// Parse a non-negative amount such as `50`, `12.5` or `₹1,200.00`, up to
/// [`Money::MAX`]
pub fn parse_amount(raw: &str) -> FinanceResult<Money> {
    let amount = Money::parse(raw).map_err(|e| {
        FinanceError::invalid(format!(
            "invalid amount '{}': {}. Use a format like '100' or '49.99'",
            raw, e
        ))
    })?;

    if amount.is_negative() {
        return Err(FinanceError::invalid(format!(
            "amount cannot be negative: '{}'",
            raw
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::invalid(format!("invalid date '{}'. Use YYYY-MM-DD", raw))
    })
}

/// Map a method name or menu number to a payment method
///
/// Numbers outside the menu become `Unknown`; names are kept as typed.
pub fn resolve_payment_method(raw: &str) -> String {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(n) => n
            .checked_sub(1)
            .and_then(|i| PAYMENT_METHODS.get(i))
            .copied()
            .unwrap_or("Unknown")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
