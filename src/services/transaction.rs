//! Transaction service
//!
//! Provides the mutation entry points over the store: minting ids, replacing
//! and removing records by id, and the filtered listing used by every view.
//! Every mutation writes the full collection back to disk before returning.

use log::warn;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Month, Transaction, TransactionId, TransactionKind};
use crate::storage::TransactionStore;

use chrono::NaiveDate;

/// Input for creating (or fully replacing) a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Options for filtering transactions
///
/// Every set field must match (predicates are conjunctive); unset fields
/// impose no constraint. Filtering preserves the store's ordering, and an
/// empty result is an ordinary outcome.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by exact category name
    pub category: Option<String>,
    /// Filter by calendar month
    pub month: Option<Month>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by month
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Check whether a transaction passes every set predicate
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        if let Some(month) = self.month {
            if !month.contains(txn.date) {
                return false;
            }
        }
        true
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a TransactionStore,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a TransactionStore) -> Self {
        Self { store }
    }

    /// Create a new transaction with a freshly minted id
    pub fn create(&self, input: NewTransaction) -> TallyResult<Transaction> {
        let id = self.store.mint_id()?;
        let txn = Transaction::new(
            id,
            input.kind,
            input.amount,
            input.category,
            input.description,
            input.date,
        );

        self.store.insert(txn.clone())?;
        self.persist();

        Ok(txn)
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> TallyResult<Option<Transaction>> {
        self.store.get(id)
    }

    /// List transactions matching the filter, in store order
    pub fn list(&self, filter: &TransactionFilter) -> TallyResult<Vec<Transaction>> {
        let mut transactions = self.store.get_all()?;
        transactions.retain(|t| filter.matches(t));
        Ok(transactions)
    }

    /// Replace the transaction matching `id` with the given fields
    ///
    /// The id is preserved; everything else is taken from the input. Returns
    /// `NotFound` and changes nothing if no record matches.
    pub fn update(&self, id: TransactionId, input: NewTransaction) -> TallyResult<Transaction> {
        let replacement = Transaction::new(
            id,
            input.kind,
            input.amount,
            input.category,
            input.description,
            input.date,
        );

        if !self.store.replace(id, replacement.clone())? {
            return Err(TallyError::transaction_not_found(id.to_string()));
        }

        self.persist();
        Ok(replacement)
    }

    /// Delete the transaction matching `id`
    ///
    /// Deletion is irreversible; callers are expected to confirm with the
    /// user first. Returns `NotFound` and changes nothing if no record
    /// matches.
    pub fn delete(&self, id: TransactionId) -> TallyResult<Transaction> {
        let removed = self
            .store
            .remove(id)?
            .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;

        self.persist();
        Ok(removed)
    }

    /// Count transactions
    pub fn count(&self) -> TallyResult<usize> {
        self.store.count()
    }

    /// Write the collection through to disk
    ///
    /// A rejected write is reported as a warning and the in-memory mutation
    /// is kept; the previous on-disk snapshot stays intact until the next
    /// successful save.
    fn persist(&self) {
        if let Err(err) = self.store.save() {
            warn!("Changes were not written to disk: {}", err);
        }
    }
}
