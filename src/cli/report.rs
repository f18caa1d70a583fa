//! Report CLI commands
//!
//! Implements the summary view and the monthly/category reports.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{format_category_totals, format_monthly_series, format_totals};
use crate::display::transaction::format_transaction_register;
use crate::error::{TallyError, TallyResult};
use crate::models::TransactionKind;
use crate::reports::{category_totals, monthly_series, Totals};
use crate::storage::TransactionStore;

/// How many recent transactions the summary shows below the totals
const SUMMARY_RECENT_COUNT: usize = 5;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income and expense totals per calendar month
    Monthly {
        /// Number of months to include (defaults to the configured window)
        #[arg(short, long)]
        months: Option<usize>,
    },
    /// Totals per category for one transaction type
    Categories {
        /// Transaction type to break down (income or expense)
        #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "expense")]
        kind: String,
    },
}

/// Handle the summary command: totals plus the most recent activity
pub fn handle_summary(store: &TransactionStore, settings: &Settings) -> TallyResult<()> {
    let transactions = store.get_all()?;
    let totals = Totals::compute(&transactions);

    print!("{}", format_totals(&totals, &settings.currency_symbol));

    let recent: Vec<_> = transactions
        .into_iter()
        .take(SUMMARY_RECENT_COUNT)
        .collect();
    if !recent.is_empty() {
        println!("\nRecent transactions:");
        print!("{}", format_transaction_register(&recent));
    }

    Ok(())
}

/// Handle a report command
pub fn handle_report_command(
    store: &TransactionStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let transactions = store.get_all()?;

    match cmd {
        ReportCommands::Monthly { months } => {
            let months = months.unwrap_or(settings.report_months);
            let reference = chrono::Local::now().date_naive();
            let series = monthly_series(&transactions, months, reference);

            print!(
                "{}",
                format_monthly_series(&series, &settings.currency_symbol)
            );
        }

        ReportCommands::Categories { kind } => {
            let kind: TransactionKind = kind
                .parse()
                .map_err(|e: crate::models::transaction::KindParseError| {
                    TallyError::Validation(e.to_string())
                })?;

            let rows = category_totals(&transactions, kind);
            print!(
                "{}",
                format_category_totals(&rows, kind, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
