//! Orphans command implementation
//!
//! An orphan has no outgoing links and receives none, so it is disconnected
//! from the rest of the collection.

use slipbox_core::collection::Collection;
use slipbox_core::error::Result;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, collection: &Collection) -> Result<()> {
    let mut orphans: Vec<&String> = collection.orphans().iter().collect();
    orphans.sort();

    match cli.format {
        OutputFormat::Json => {
            let count = orphans.len();
            let output = serde_json::json!({
                "orphans": orphans,
                "count": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if orphans.is_empty() {
                if !cli.quiet {
                    println!("No orphans.");
                }
            } else {
                for id in orphans {
                    println!("{}", id);
                }
            }
        }
    }

    Ok(())
}
