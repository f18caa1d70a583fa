//! Transaction store backed by a single JSON document
//!
//! Holds the ordered in-memory collection (most recent first) and the
//! load/save halves of persistence. The persisted form is a bare JSON array
//! of transaction records at a fixed path. The store is the single source of
//! truth: every read hands out a snapshot taken at call time.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// In-memory transaction collection with JSON persistence
///
/// Ordering is newest-first: inserts prepend, and the persisted array keeps
/// the same order so a reload reproduces the display order exactly.
pub struct TransactionStore {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new transaction store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    ///
    /// A missing file yields an empty collection. A malformed file is logged
    /// and also yields an empty collection; load never fails on bad data.
    pub fn load(&self) -> Result<(), TallyError> {
        let loaded: Vec<Transaction> = read_json_or_default(&self.path);

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = loaded;
        Ok(())
    }

    /// Save the full collection to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Mint a fresh transaction id (one past the highest in the store)
    pub fn mint_id(&self) -> Result<TransactionId, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let highest = data.iter().map(|t| t.id.raw()).max().unwrap_or(0);
        Ok(TransactionId::new(highest + 1))
    }

    /// Insert a transaction at the front of the collection
    pub fn insert(&self, txn: Transaction) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, txn);
        Ok(())
    }

    /// Replace the record matching `id`, keeping its position
    ///
    /// Returns `false` (and changes nothing) if no record matches.
    pub fn replace(&self, id: TransactionId, txn: Transaction) -> Result<bool, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = txn;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record matching `id`
    ///
    /// Returns the removed record, or `None` (and changes nothing) if no
    /// record matches.
    pub fn remove(&self, id: TransactionId) -> Result<Option<Transaction>, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter().position(|t| t.id == id) {
            Some(index) => Ok(Some(data.remove(index))),
            None => Ok(None),
        }
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Snapshot of all transactions in store order (newest first)
    pub fn get_all(&self) -> Result<Vec<Transaction>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let store = TransactionStore::new(path);
        (temp_dir, store)
    }

    fn sample_txn(id: i64, units: i64) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            TransactionKind::Expense,
            Money::from_units(units),
            "Food",
            "Groceries",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(&path, "{{{ definitely not json").unwrap();

        let store = TransactionStore::new(path);
        store.load().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_prepends() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.insert(sample_txn(1, 100)).unwrap();
        store.insert(sample_txn(2, 200)).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id.raw(), 2);
        assert_eq!(all[1].id.raw(), 1);
    }

    #[test]
    fn test_mint_id() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        assert_eq!(store.mint_id().unwrap().raw(), 1);

        store.insert(sample_txn(7, 100)).unwrap();
        assert_eq!(store.mint_id().unwrap().raw(), 8);

        store.insert(sample_txn(3, 100)).unwrap();
        assert_eq!(store.mint_id().unwrap().raw(), 8);
    }

    #[test]
    fn test_get_and_replace() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.insert(sample_txn(1, 100)).unwrap();
        store.insert(sample_txn(2, 200)).unwrap();

        let mut updated = sample_txn(1, 999);
        updated.category = "Bills".to_string();
        assert!(store.replace(TransactionId::new(1), updated).unwrap());

        let fetched = store.get(TransactionId::new(1)).unwrap().unwrap();
        assert_eq!(fetched.amount.cents(), 99900);
        assert_eq!(fetched.category, "Bills");

        // Position preserved: id 1 is still the older entry
        let all = store.get_all().unwrap();
        assert_eq!(all[1].id.raw(), 1);

        // Unknown id changes nothing
        assert!(!store.replace(TransactionId::new(42), sample_txn(42, 1)).unwrap());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.insert(sample_txn(1, 100)).unwrap();
        assert_eq!(store.count().unwrap(), 1);

        let removed = store.remove(TransactionId::new(1)).unwrap();
        assert_eq!(removed.unwrap().id.raw(), 1);
        assert_eq!(store.count().unwrap(), 0);

        // Removing a missing id leaves the store untouched
        assert!(store.remove(TransactionId::new(1)).unwrap().is_none());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.insert(sample_txn(1, 100)).unwrap();
        store.insert(sample_txn(2, 200)).unwrap();
        store.save().unwrap();

        let path = temp_dir.path().join("transactions.json");
        let store2 = TransactionStore::new(path);
        store2.load().unwrap();

        let all = store2.get_all().unwrap();
        assert_eq!(all.len(), 2);
        // Order survives the round trip
        assert_eq!(all[0].id.raw(), 2);
        assert_eq!(all[1].id.raw(), 1);
    }

    #[test]
    fn test_persisted_form_is_bare_array() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.insert(sample_txn(1, 100)).unwrap();
        store.save().unwrap();

        let contents =
            std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["type"], "expense");
    }
}
