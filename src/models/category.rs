//! Category vocabulary
//!
//! A fixed, read-only catalog of category names keyed by transaction kind.
//! Callers populating selection prompts read from here; nothing mutates it at
//! runtime. Membership is advisory: the store accepts categories outside the
//! catalog (see the add/edit notices in the CLI).

use super::transaction::TransactionKind;

/// Categories available for income transactions, in display order
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Gift",
    "Other",
];

/// Categories available for expense transactions, in display order
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Bills",
    "Health",
    "Education",
    "Other",
];

/// The category list for a transaction kind
pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Check whether a category name belongs to the catalog for the given kind
pub fn is_known(kind: TransactionKind, name: &str) -> bool {
    categories_for(kind).contains(&name)
}
