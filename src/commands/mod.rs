//! CLI commands for slipbox

pub mod orphans;
pub mod summary;
pub mod widows;

use slipbox_core::collection::Collection;
use slipbox_core::config::Config;
use slipbox_core::error::{Result, SlipboxError};
use slipbox_core::scan;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    let collection = build_collection(cli)?;

    match &cli.command {
        None | Some(Commands::Summary) => summary::execute(cli, &collection),
        Some(Commands::Orphans) => orphans::execute(cli, &collection),
        Some(Commands::Widows) => widows::execute(cli, &collection),
    }
}

/// Resolve configuration and build the collection every command works on
fn build_collection(cli: &Cli) -> Result<Collection> {
    let dir = cli.dir.as_deref().ok_or_else(|| {
        SlipboxError::UsageError("--dir <path> is required (the notes directory)".to_string())
    })?;

    let config = Config::load_or_default(dir)?;
    let marker = cli.marker.unwrap_or(config.marker);

    let sources = scan::scan_notes(dir, &config.extension)?;
    Ok(Collection::build(marker, sources))
}
