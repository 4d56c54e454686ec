//! Transaction model
//!
//! A dated income or expense record. Transactions are never edited after
//! creation; the only way to change one is to delete it and add another.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use super::month::YearMonth;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionTypeParseError;

    /// Case-insensitive: "Income", "EXPENSE" and "income" are all accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("income") {
            Ok(Self::Income)
        } else if s.eq_ignore_ascii_case("expense") {
            Ok(Self::Expense)
        } else {
            Err(TransactionTypeParseError(s.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for transaction type parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTypeParseError(String);

impl fmt::Display for TransactionTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown transaction type '{}', expected income or expense",
            self.0
        )
    }
}

impl std::error::Error for TransactionTypeParseError {}

/// A financial transaction as stored in `transactions.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Never negative
    pub amount: Money,

    pub category: String,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,

    #[serde(default = "unknown_payment_method")]
    pub payment_method: String,

    /// Informational only; nothing is generated from it
    #[serde(default)]
    pub recurring: bool,

    /// Comma-separated free-form tags
    #[serde(default)]
    pub tags: String,
}

fn unknown_payment_method() -> String {
    "Unknown".to_string()
}

/// Field values for a transaction that does not have an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub payment_method: String,
    pub recurring: bool,
    pub tags: String,
}

impl NewTransaction {
    /// Minimal constructor; the remaining fields start empty
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: String::new(),
            date,
            payment_method: unknown_payment_method(),
            recurring: false,
            tags: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Attach an id, producing the stored record
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            payment_method: self.payment_method,
            recurring: self.recurring,
            tags: self.tags,
        }
    }
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The month this transaction is counted in
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        same_label(&self.category, category)
    }

    /// Substring match against the raw tag string
    pub fn has_tag(&self, needle: &str) -> bool {
        self.tags.contains(needle)
    }

    /// Individual tags, trimmed, empty entries dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {} | {} | {} | {}{}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.kind.as_str().to_uppercase(),
            self.category,
            self.description,
            self.payment_method,
            if self.recurring { " (Recurring)" } else { "" }
        )
    }
}

/// Case-insensitive label equality used for categories
pub fn same_label(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
