//! Summary command implementation
//!
//! Prints the headline statistics: note count, link count, orphan count.

use slipbox_core::collection::Collection;
use slipbox_core::error::Result;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, collection: &Collection) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&collection.stats())?);
        }
        OutputFormat::Human => {
            println!("{}", collection.summary());
        }
    }

    Ok(())
}
