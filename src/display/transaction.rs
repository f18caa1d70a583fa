//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::{Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!(
        "{:>6} {} {:15} {:25} {:>12}",
        txn.id.to_string(),
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 15),
        truncate(&txn.description, 25),
        format!("{}{}", sign, txn.amount)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6} {:10} {:15} {:25} {:>12}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(73));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output.push_str(&format!("Amount:      {}\n", txn.amount));

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::new(1),
            TransactionKind::Income,
            Money::from_units(3500),
            "Salary",
            "Monthly Salary",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&sample());
        assert!(formatted.contains("2024-01-05"));
        assert!(formatted.contains("Salary"));
        assert!(formatted.contains("+$3500.00"));
    }

    #[test]
    fn test_expense_row_shows_minus() {
        let mut txn = sample();
        txn.kind = TransactionKind::Expense;
        let formatted = format_transaction_row(&txn);
        assert!(formatted.contains("-$3500.00"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[]);
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_register_has_header() {
        let formatted = format_transaction_register(&[sample()]);
        assert!(formatted.contains("Date"));
        assert!(formatted.contains("Category"));
        assert!(formatted.contains("Amount"));
    }

    #[test]
    fn test_format_transaction_details() {
        let formatted = format_transaction_details(&sample());
        assert!(formatted.contains("Transaction: 1"));
        assert!(formatted.contains("Type:        Income"));
        assert!(formatted.contains("Monthly Salary"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long string", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }
}
