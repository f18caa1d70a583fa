//! Service layer for tally
//!
//! Business logic on top of the storage layer: id minting, write-through
//! mutations, and filtered listings.

pub mod transaction;

pub use transaction::{NewTransaction, TransactionFilter, TransactionService};
