//! Short transaction identifiers
//!
//! Ids are the first eight hex digits of a random v4 UUID. They are short
//! enough to type at a prompt; the store guarantees uniqueness by
//! regenerating on collision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of a generated id
pub const ID_LEN: usize = 8;

/// Opaque short identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random id
    pub fn new() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(uuid[..ID_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = IdParseError;

    /// Accepts any non-empty token; ids written by older files need not be hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('[').unwrap_or(s);
        let s = s.strip_suffix(']').unwrap_or(s);
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(IdParseError(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

/// Error type for id parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid transaction id: '{}'", self.0)
    }
}

impl std::error::Error for IdParseError {}
