//! CLI argument parsing for slipbox
//!
//! Uses clap for argument parsing.
//! Supports global flags: --dir, --marker, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use slipbox_core::format::OutputFormat;

/// Slipbox - link statistics for a zetteldeft note collection
#[derive(Parser, Debug)]
#[command(name = "slipbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Notes directory to analyze
    #[arg(long, short, global = true)]
    pub dir: Option<PathBuf>,

    /// Link marker character (overrides slipbox.toml)
    #[arg(long, short, global = true)]
    pub marker: Option<char>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging (maps to debug level)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace, or a tracing directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report collection statistics (the default command)
    Summary,

    /// List notes with no incoming and no outgoing links
    Orphans,

    /// List links whose target note does not exist
    Widows,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
