//! CLI command definitions and handlers

pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use category::handle_categories_command;
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, handle_summary, ReportCommands};
pub use transaction::{handle_transaction_command, FilterArgs, TransactionCommands};
