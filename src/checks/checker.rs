//! Tool, package and extension checks.
//!
//! The [`Checker`] resolves executables against an explicit list of search
//! path directories and runs them through a [`CommandRunner`]. Every failure
//! is folded into the returned status; nothing propagates to the caller.

use crate::checks::status::{
    ExtensionReport, ExtensionResult, PackageReport, PackageStatus, ToolReport, ToolStatus,
};
use crate::checks::version::{Version, VersionScheme};
use crate::config::{ExtensionConfig, ToolSpec};
use crate::error::{DevcheckError, Result};
use crate::shell::{resolve_tool_path, split_command, CommandOutput, CommandRunner};
use anyhow::anyhow;
use std::collections::HashSet;
use std::path::PathBuf;

/// Subcommand that makes an editor CLI print one extension id per line.
pub const LIST_EXTENSIONS_ARG: &str = "--list-extensions";

/// Runs checks against the local environment.
pub struct Checker<'a> {
    runner: &'a dyn CommandRunner,
    path_entries: Vec<PathBuf>,
    scheme: VersionScheme,
}

impl<'a> Checker<'a> {
    /// Create a checker that looks up executables in `path_entries`.
    pub fn new(
        runner: &'a dyn CommandRunner,
        path_entries: Vec<PathBuf>,
        scheme: VersionScheme,
    ) -> Self {
        Self {
            runner,
            path_entries,
            scheme,
        }
    }

    /// Check that a tool is installed and meets its minimum version.
    pub fn check_tool(&self, tool: &ToolSpec) -> ToolReport {
        let status = if resolve_tool_path(&tool.name, &self.path_entries).is_none() {
            ToolStatus::NotInstalled
        } else {
            match self.tool_version(tool) {
                Ok(found) => self.compare(tool, found),
                Err(e) => {
                    tracing::debug!("Could not determine version of {}: {}", tool.name, e);
                    ToolStatus::BelowMinimum { found: None }
                }
            }
        };

        ToolReport {
            name: tool.name.clone(),
            min_version: tool.min_version.clone(),
            status,
        }
    }

    fn tool_version(&self, tool: &ToolSpec) -> Result<Version> {
        let output = self.capture(&split_command(&tool.command))?;
        let combined = output.combined();
        self.scheme.extract(&combined).ok_or_else(|| {
            DevcheckError::Other(anyhow!(
                "no version found in output of `{}`: {:?}",
                tool.command,
                combined.trim()
            ))
        })
    }

    fn compare(&self, tool: &ToolSpec, found: Version) -> ToolStatus {
        let Some(minimum) = self.scheme.parse_minimum(&tool.min_version) else {
            tracing::debug!(
                "Minimum version '{}' for {} is not a {} version",
                tool.min_version,
                tool.name,
                self.scheme
            );
            return ToolStatus::BelowMinimum { found: Some(found) };
        };

        tracing::debug!(
            "{} reports version {} (minimum {})",
            tool.name,
            found,
            minimum
        );
        if found.satisfies(&minimum) {
            ToolStatus::Satisfied { found }
        } else {
            ToolStatus::BelowMinimum { found: Some(found) }
        }
    }

    /// Check that `name` can be imported by `interpreter`.
    pub fn check_package(&self, interpreter: &str, name: &str) -> PackageReport {
        let argv = vec![
            interpreter.to_string(),
            "-c".to_string(),
            format!("import {}", name),
        ];

        let status = match self.capture(&argv) {
            Ok(_) => PackageStatus::Installed,
            Err(e) => {
                tracing::debug!("Import of {} failed: {}", name, e);
                PackageStatus::NotInstalled
            }
        };

        PackageReport {
            name: name.to_string(),
            status,
        }
    }

    /// Ask the editor CLI for its installed extensions.
    pub fn list_extensions(&self, cli: &str) -> Result<HashSet<String>> {
        let argv = vec![cli.to_string(), LIST_EXTENSIONS_ARG.to_string()];
        let output = self.capture(&argv)?;
        Ok(parse_extension_list(&output.stdout))
    }

    /// Check every configured extension against the editor CLI's list.
    ///
    /// Ids must match a listed line exactly.
    pub fn check_extensions(&self, config: &ExtensionConfig) -> ExtensionReport {
        let installed = match self.list_extensions(&config.cli) {
            Ok(installed) => installed,
            Err(e) => {
                tracing::debug!("Could not list extensions with {}: {}", config.cli, e);
                return ExtensionReport::CliUnavailable;
            }
        };

        ExtensionReport::Listed(
            config
                .ids
                .iter()
                .map(|id| ExtensionResult {
                    id: id.clone(),
                    installed: installed.contains(id),
                })
                .collect(),
        )
    }

    /// Resolve `argv[0]` on the search path, run it, and require exit code 0.
    fn capture(&self, argv: &[String]) -> Result<CommandOutput> {
        let command = argv.join(" ");
        let Some((program, args)) = argv.split_first() else {
            return Err(DevcheckError::CommandFailed {
                command,
                code: None,
            });
        };

        let resolved = resolve_tool_path(program, &self.path_entries).ok_or_else(|| {
            DevcheckError::CommandFailed {
                command: command.clone(),
                code: None,
            }
        })?;

        self.runner.run(&resolved, args)?.require_success(&command)
    }
}

/// Parse `--list-extensions` output: one id per non-empty, trimmed line.
pub fn parse_extension_list(stdout: &str) -> HashSet<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
