//! Transaction model
//!
//! Represents a single recorded income or expense event. The serialized form
//! mirrors the persisted record layout: `{id, amount, type, category,
//! description, date}` with `type` holding `"income"` or `"expense"` and
//! `date` an ISO `YYYY-MM-DD` string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// All kinds, in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// The lowercase wire name ("income" / "expense")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

/// Error type for transaction kind parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindParseError(pub String);

impl fmt::Display for KindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid transaction type: '{}'. Use income or expense", self.0)
    }
}

impl std::error::Error for KindParseError {}

/// Unique transaction identifier
///
/// A plain integer on the wire; minted by the store at creation time and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw id value
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A recorded income or expense event
///
/// The store accepts records as given: amounts are expected to be positive and
/// categories are expected to come from the catalog for the record's kind, but
/// neither is checked at this boundary. Records read back from disk or handed
/// in by callers are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount in currency units (positive; the sign of the effect comes from `kind`)
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category label within the kind's vocabulary
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Transaction date
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            amount,
            kind,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with the sign of its effect on the balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}
