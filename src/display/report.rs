//! Report display formatting
//!
//! Turns the aggregation results into terminal text: summary cards, the
//! category breakdown, and the monthly series table.

use crate::models::TransactionKind;
use crate::reports::{CategoryTotal, MonthlyEntry, Totals};

/// Format the headline totals as summary cards
pub fn format_totals(totals: &Totals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Balance:  {}\n",
        totals.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Income:   {}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses: {}\n",
        totals.expenses.format_with_symbol(symbol)
    ));

    output
}

/// Format per-category sums with their share of the kind's total
pub fn format_category_totals(
    rows: &[CategoryTotal],
    kind: TransactionKind,
    symbol: &str,
) -> String {
    if rows.is_empty() {
        return format!("No {} data available.\n", kind.as_str());
    }

    let grand_total: i64 = rows.iter().map(|r| r.total.cents()).sum();

    let mut output = String::new();
    output.push_str(&format!("{} by category\n", kind));
    output.push_str(&format!("{:<20} {:>12} {:>8}\n", "Category", "Amount", "%"));
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for row in rows {
        let percentage = if grand_total == 0 {
            0.0
        } else {
            (row.total.cents() as f64 / grand_total as f64) * 100.0
        };

        output.push_str(&format!(
            "{:<20} {:>12} {:>7.1}%\n",
            row.category,
            row.total.format_with_symbol(symbol),
            percentage
        ));
    }

    output
}

/// Format the monthly series as a table, oldest month first
pub fn format_monthly_series(series: &[MonthlyEntry], symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<10} {:>12} {:>12}\n",
        "Month", "Income", "Expenses"
    ));
    output.push_str(&"-".repeat(36));
    output.push('\n');

    for entry in series {
        output.push_str(&format!(
            "{:<10} {:>12} {:>12}\n",
            entry.month.label(),
            entry.income.format_with_symbol(symbol),
            entry.expenses.format_with_symbol(symbol)
        ));
    }

    output
}
