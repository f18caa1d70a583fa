//! Export module for tally
//!
//! Renders the store (or a filtered view) as a flat CSV table.

pub mod csv;

pub use csv::{default_export_filename, write_transactions_csv};
