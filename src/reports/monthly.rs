//! Monthly series aggregation
//!
//! Produces the fixed-length month-by-month income/expense series behind the
//! monthly report: one entry per calendar month, oldest first, zero-filled for
//! months with no activity.

use chrono::NaiveDate;

use crate::models::{Money, Month, Transaction, TransactionKind};

/// Income and expense sums for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyEntry {
    /// The calendar month
    pub month: Month,
    /// Sum of income amounts dated in this month
    pub income: Money,
    /// Sum of expense amounts dated in this month
    pub expenses: Money,
}

/// The per-month series for the `month_count` months ending at `reference`
///
/// Always returns exactly `month_count` entries, oldest first. A month with
/// no matching transactions carries zero sums rather than being skipped.
pub fn monthly_series(
    transactions: &[Transaction],
    month_count: usize,
    reference: NaiveDate,
) -> Vec<MonthlyEntry> {
    let mut months = Vec::with_capacity(month_count);
    let mut current = Month::from_date(reference);
    for _ in 0..month_count {
        months.push(current);
        current = current.prev();
    }
    months.reverse();

    months
        .into_iter()
        .map(|month| {
            let mut income = Money::zero();
            let mut expenses = Money::zero();

            for txn in transactions.iter().filter(|t| month.contains(t.date)) {
                match txn.kind {
                    TransactionKind::Income => income += txn.amount,
                    TransactionKind::Expense => expenses += txn.amount,
                }
            }

            MonthlyEntry {
                month,
                income,
                expenses,
            }
        })
        .collect()
}
