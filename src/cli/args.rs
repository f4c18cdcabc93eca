//! CLI argument definitions.
//!
//! Running with no arguments performs every check with the active
//! configuration. The flags only affect configuration lookup and output.

use clap::Parser;
use std::path::PathBuf;

/// devcheck - Check that development tools, packages and editor extensions are installed.
#[derive(Debug, Parser)]
#[command(name = "devcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML config file (overrides ./.devcheck.yml and the built-in defaults)
    #[arg(short, long, env = "DEVCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
