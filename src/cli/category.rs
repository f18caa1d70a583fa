//! Category CLI command
//!
//! Lists the fixed category vocabulary, the way the original selection
//! controls were populated.

use crate::error::{TallyError, TallyResult};
use crate::models::{categories_for, TransactionKind};

/// Handle the categories command
///
/// With a kind, prints that kind's list; without one, prints both.
pub fn handle_categories_command(kind: Option<String>) -> TallyResult<()> {
    let kinds: Vec<TransactionKind> = match kind {
        Some(s) => {
            let kind = s
                .parse()
                .map_err(|e: crate::models::transaction::KindParseError| {
                    TallyError::Validation(e.to_string())
                })?;
            vec![kind]
        }
        None => TransactionKind::all().to_vec(),
    };

    for kind in kinds {
        println!("{} categories:", kind);
        for name in categories_for(kind) {
            println!("  {}", name);
        }
        println!();
    }

    Ok(())
}
