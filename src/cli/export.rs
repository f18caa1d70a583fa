//! Export CLI command
//!
//! Writes the store (or a filtered view) to a CSV file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::error::{TallyError, TallyResult};
use crate::export::{default_export_filename, write_transactions_csv};
use crate::services::TransactionService;
use crate::storage::TransactionStore;

use super::transaction::FilterArgs;

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file path (defaults to transactions_<today>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(store: &TransactionStore, args: ExportArgs) -> TallyResult<()> {
    let service = TransactionService::new(store);
    let filter = args.filter.to_filter()?;
    let transactions = service.list(&filter)?;

    if transactions.is_empty() {
        println!("No transactions to export");
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(default_export_filename(chrono::Local::now().date_naive()))
    });

    let file = File::create(&path)
        .map_err(|e| TallyError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    write_transactions_csv(&transactions, &mut writer)?;

    println!(
        "Exported {} transactions to {}",
        transactions.len(),
        path.display()
    );

    Ok(())
}
