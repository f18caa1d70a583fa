//! CSV export functionality
//!
//! Renders a transaction snapshot (full or filtered) as comma-separated rows
//! for spreadsheet import.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// The default export file name for a given day: `transactions_<date>.csv`
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("transactions_{}.csv", date.format("%Y-%m-%d"))
}

/// Write transactions as CSV, one row per transaction in the given order
///
/// The header row is unquoted; every data field is wrapped in double quotes.
/// Embedded quote characters are written through untouched, so a description
/// containing `"` produces a row most CSV parsers will misread. Amounts are
/// rendered as plain decimal text ("3500", "10.5"), not currency-formatted.
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TallyResult<()> {
    writeln!(writer, "Date,Type,Category,Description,Amount")
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
            txn.date.format("%Y-%m-%d"),
            txn.kind.as_str(),
            txn.category,
            txn.description,
            txn.amount.to_plain_string()
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionKind};

    fn scenario() -> Vec<Transaction> {
        vec![
            Transaction::new(
                TransactionId::new(1),
                TransactionKind::Income,
                Money::from_units(3500),
                "Salary",
                "Monthly Salary",
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ),
            Transaction::new(
                TransactionId::new(2),
                TransactionKind::Expense,
                Money::from_units(1200),
                "Food",
                "Groceries",
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_export_two_record_scenario() {
        let mut output = Vec::new();
        write_transactions_csv(&scenario(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Date,Type,Category,Description,Amount\n\
             \"2024-01-05\",\"income\",\"Salary\",\"Monthly Salary\",\"3500\"\n\
             \"2024-01-10\",\"expense\",\"Food\",\"Groceries\",\"1200\"\n"
        );
    }

    #[test]
    fn test_export_empty_is_header_only() {
        let mut output = Vec::new();
        write_transactions_csv(&[], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "Date,Type,Category,Description,Amount\n");
    }

    #[test]
    fn test_fractional_amount_stays_plain() {
        let txn = Transaction::new(
            TransactionId::new(1),
            TransactionKind::Expense,
            Money::from_cents(1050),
            "Food",
            "Lunch",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );

        let mut output = Vec::new();
        write_transactions_csv(&[txn], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"10.5\""));
        assert!(!text.contains('$'));
    }

    #[test]
    fn test_embedded_quotes_pass_through_unescaped() {
        let txn = Transaction::new(
            TransactionId::new(1),
            TransactionKind::Expense,
            Money::from_units(20),
            "Food",
            "the \"good\" bakery",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );

        let mut output = Vec::new();
        write_transactions_csv(&[txn], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        // Quoting wraps the field but never doubles the inner quotes
        assert!(text.contains("\"the \"good\" bakery\""));
    }

    #[test]
    fn test_default_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(default_export_filename(date), "transactions_2024-06-15.csv");
    }
}
