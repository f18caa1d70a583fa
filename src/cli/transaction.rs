//! Transaction CLI commands
//!
//! Implements the add/list/show/edit/delete commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{TallyError, TallyResult};
use crate::models::{is_known, Money, Month, TransactionId, TransactionKind};
use crate::services::{NewTransaction, TransactionFilter, TransactionService};
use crate::storage::TransactionStore;

/// Shared filter flags for listing and exporting
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Filter by type (income or expense)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Filter by category name
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
}

impl FilterArgs {
    /// Build a transaction filter from the provided flags
    pub fn to_filter(&self) -> TallyResult<TransactionFilter> {
        let mut filter = TransactionFilter::new();

        if let Some(kind_str) = &self.kind {
            let kind = parse_kind(kind_str)?;
            filter = filter.kind(kind);
        }

        if let Some(category) = &self.category {
            filter = filter.category(category.clone());
        }

        if let Some(month_str) = &self.month {
            let month = Month::parse(month_str)
                .map_err(|e| TallyError::Validation(e.to_string()))?;
            filter = filter.month(month);
        }

        Ok(filter)
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g. "3500" or "10.50"); always positive
        amount: String,
        /// Transaction type (income or expense)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Category name
        category: String,
        /// Description
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: TransactionId,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: TransactionId,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New type (income or expense)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &TransactionStore,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            category,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let kind = parse_kind(&kind)?;
            let date = parse_date_or_today(date)?;

            let txn = service.create(NewTransaction {
                amount,
                kind,
                category,
                description,
                date,
            })?;

            println!("Added transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date);
            println!("  Type:     {}", txn.kind);
            println!("  Category: {}", txn.category);
            println!("  Amount:   {}", txn.amount);

            if !is_known(txn.kind, &txn.category) {
                println!(
                    "note: '{}' is not a standard {} category (kept as given)",
                    txn.category,
                    txn.kind.as_str()
                );
            }
        }

        TransactionCommands::List { filter, limit } => {
            let filter = filter.to_filter()?;
            let mut transactions = service.list(&filter)?;

            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_register(&transactions));
            println!("\nShowing {} transactions", transactions.len());
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .get(id)?
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;

            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Edit {
            id,
            amount,
            kind,
            category,
            description,
            date,
        } => {
            let existing = service
                .get(id)?
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;

            let new_amount = match amount {
                Some(s) => parse_amount(&s)?,
                None => existing.amount,
            };
            let new_kind = match kind {
                Some(s) => parse_kind(&s)?,
                None => existing.kind,
            };
            let new_date = match date {
                Some(s) => parse_date(&s)?,
                None => existing.date,
            };

            let updated = service.update(
                id,
                NewTransaction {
                    amount: new_amount,
                    kind: new_kind,
                    category: category.unwrap_or(existing.category),
                    description: description.unwrap_or(existing.description),
                    date: new_date,
                },
            )?;

            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", updated.date);
            println!("  Type:     {}", updated.kind);
            println!("  Category: {}", updated.category);
            println!("  Amount:   {}", updated.amount);

            if !is_known(updated.kind, &updated.category) {
                println!(
                    "note: '{}' is not a standard {} category (kept as given)",
                    updated.category,
                    updated.kind.as_str()
                );
            }
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .get(id)?
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:     {}", txn.date);
                println!("  Category: {}", txn.category);
                println!("  Amount:   {}", txn.amount);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id, deleted.date, deleted.category
            );
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> TallyResult<Money> {
    let amount = Money::parse(s).map_err(|e| {
        TallyError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '50.00' or '100'. Error: {}",
            s, e
        ))
    })?;

    if !amount.is_positive() {
        return Err(TallyError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }

    Ok(amount)
}

fn parse_kind(s: &str) -> TallyResult<TransactionKind> {
    s.parse()
        .map_err(|e: crate::models::transaction::KindParseError| {
            TallyError::Validation(e.to_string())
        })
}

fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TallyError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

fn parse_date_or_today(date: Option<String>) -> TallyResult<NaiveDate> {
    match date {
        Some(s) => parse_date(&s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        assert!(parse_amount("50.00").is_ok());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_filter_args_to_filter() {
        let args = FilterArgs {
            kind: Some("expense".to_string()),
            category: Some("Food".to_string()),
            month: Some("2024-01".to_string()),
        };

        let filter = args.to_filter().unwrap();
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.category.as_deref(), Some("Food"));
        assert_eq!(filter.month, Some(Month::new(2024, 1)));
    }

    #[test]
    fn test_filter_args_rejects_bad_values() {
        let args = FilterArgs {
            kind: Some("transfer".to_string()),
            ..Default::default()
        };
        assert!(args.to_filter().is_err());

        let args = FilterArgs {
            month: Some("2024-13".to_string()),
            ..Default::default()
        };
        assert!(args.to_filter().is_err());
    }

    #[test]
    fn test_empty_filter_args_build_empty_filter() {
        let filter = FilterArgs::default().to_filter().unwrap();
        assert!(filter.kind.is_none());
        assert!(filter.category.is_none());
        assert!(filter.month.is_none());
    }
}
