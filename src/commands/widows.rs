//! Widows command implementation
//!
//! A widow is a link token whose target note does not exist in the
//! collection. Detection is not implemented; `find_widows` always fails and
//! the command propagates that error.

use slipbox_core::collection::Collection;
use slipbox_core::error::Result;

use crate::cli::Cli;

pub fn execute(_cli: &Cli, collection: &Collection) -> Result<()> {
    collection.find_widows()?;
    Ok(())
}
