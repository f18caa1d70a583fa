//! Core data models for tally
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, monetary amounts, calendar months, and the category
//! vocabulary.

pub mod category;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::{categories_for, is_known, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use money::Money;
pub use month::Month;
pub use transaction::{Transaction, TransactionId, TransactionKind};
