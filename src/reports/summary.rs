//! Summary aggregation
//!
//! Computes the headline totals (income, expenses, balance) and per-category
//! sums from a transaction snapshot. These feed the summary cards and the
//! category breakdown chart data.

use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionKind};

/// Headline totals over a transaction snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expenses: Money,
    /// income - expenses
    pub balance: Money,
}

impl Totals {
    /// Compute totals over a snapshot; all three are zero for an empty one
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expenses += txn.amount,
            }
        }

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// One category's share of a kind's total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of amounts for this category
    pub total: Money,
}

/// Per-category sums for one transaction kind, largest first
///
/// Categories outside the catalog are grouped like any other; ties are broken
/// by name so the ordering is stable.
pub fn category_totals(transactions: &[Transaction], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, Money> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        *sums.entry(txn.category.as_str()).or_insert(Money::zero()) += txn.amount;
    }

    let mut rows: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::NaiveDate;

    fn txn(id: i64, kind: TransactionKind, units: i64, category: &str, date: &str) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            kind,
            Money::from_units(units),
            category,
            "",
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_totals_empty() {
        let totals = Totals::compute(&[]);
        assert_eq!(totals.income, Money::zero());
        assert_eq!(totals.expenses, Money::zero());
        assert_eq!(totals.balance, Money::zero());
    }

    #[test]
    fn test_totals_two_record_scenario() {
        let transactions = vec![
            txn(1, TransactionKind::Income, 3500, "Salary", "2024-01-05"),
            txn(2, TransactionKind::Expense, 1200, "Food", "2024-01-10"),
        ];

        let totals = Totals::compute(&transactions);
        assert_eq!(totals.income, Money::from_units(3500));
        assert_eq!(totals.expenses, Money::from_units(1200));
        assert_eq!(totals.balance, Money::from_units(2300));
    }

    #[test]
    fn test_balance_identity() {
        let transactions = vec![
            txn(1, TransactionKind::Income, 10, "Salary", "2024-01-05"),
            txn(2, TransactionKind::Expense, 25, "Food", "2024-01-10"),
            txn(3, TransactionKind::Income, 7, "Gift", "2024-03-01"),
        ];

        let totals = Totals::compute(&transactions);
        assert_eq!(totals.balance, totals.income - totals.expenses);
        // Expenses above income drive the balance negative
        assert!(totals.balance.is_negative());
    }

    #[test]
    fn test_category_totals_groups_and_sorts() {
        let transactions = vec![
            txn(1, TransactionKind::Expense, 100, "Food", "2024-01-05"),
            txn(2, TransactionKind::Expense, 250, "Bills", "2024-01-06"),
            txn(3, TransactionKind::Expense, 50, "Food", "2024-01-07"),
            txn(4, TransactionKind::Income, 999, "Salary", "2024-01-08"),
        ];

        let rows = category_totals(&transactions, TransactionKind::Expense);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Bills");
        assert_eq!(rows[0].total, Money::from_units(250));
        assert_eq!(rows[1].category, "Food");
        assert_eq!(rows[1].total, Money::from_units(150));
    }

    #[test]
    fn test_category_totals_includes_off_catalog_names() {
        let transactions = vec![
            txn(1, TransactionKind::Expense, 1200, "Rent", "2024-01-05"),
            txn(2, TransactionKind::Expense, 100, "Food", "2024-01-06"),
        ];

        let rows = category_totals(&transactions, TransactionKind::Expense);
        assert_eq!(rows[0].category, "Rent");
    }

    #[test]
    fn test_category_totals_empty_kind() {
        let transactions = vec![txn(1, TransactionKind::Income, 10, "Salary", "2024-01-05")];
        let rows = category_totals(&transactions, TransactionKind::Expense);
        assert!(rows.is_empty());
    }
}
