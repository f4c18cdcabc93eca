//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for turning parsed CLI arguments into a run

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::shell::{parse_system_path, SystemRunner};
use crate::ui::UserInterface;

use super::check::CheckCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Loads configuration and runs the checks against the real system.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher; `.devcheck.yml` is looked up in `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute the check run.
    ///
    /// # Errors
    ///
    /// Returns configuration errors; check findings never fail the run.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, source) = load_config(cli.config.as_deref(), &self.working_dir)?;
        tracing::debug!("Loaded configuration ({:?})", source);

        let runner = SystemRunner;
        let cmd = CheckCommand::new(config, parse_system_path(), &runner);
        cmd.execute(ui)
    }
}
