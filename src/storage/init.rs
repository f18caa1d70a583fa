//! Storage initialization
//!
//! Handles first-run setup and optional demonstration data.

use chrono::{Duration, NaiveDate};

use crate::config::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::{Money, Transaction, TransactionKind};

use super::transactions::TransactionStore;

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &TallyPaths) -> Result<(), TallyError> {
    paths.ensure_directories()
}

/// Seed the store with demonstration records when it is empty
///
/// Returns the number of records added (zero when the store already has
/// data). The set mirrors a week of typical activity and intentionally
/// includes one category ("Rent") outside the stock expense list; category
/// membership is advisory, not enforced.
pub fn seed_sample_data(store: &TransactionStore, today: NaiveDate) -> Result<usize, TallyError> {
    if store.count()? > 0 {
        return Ok(0);
    }

    let samples = [
        (
            TransactionKind::Income,
            Money::from_units(3500),
            "Salary",
            "Monthly Salary",
            today,
        ),
        (
            TransactionKind::Income,
            Money::from_units(500),
            "Freelance",
            "Website Project",
            today - Duration::days(1),
        ),
        (
            TransactionKind::Expense,
            Money::from_units(1200),
            "Rent",
            "Monthly Rent",
            today - Duration::days(2),
        ),
        (
            TransactionKind::Expense,
            Money::from_units(300),
            "Food",
            "Groceries",
            today - Duration::days(3),
        ),
        (
            TransactionKind::Expense,
            Money::from_units(150),
            "Transport",
            "Gas & Transportation",
            today - Duration::days(4),
        ),
    ];

    for (kind, amount, category, description, date) in samples {
        let id = store.mint_id()?;
        store.insert(Transaction::new(id, kind, amount, category, description, date))?;
    }

    store.save()?;
    Ok(5)
}
