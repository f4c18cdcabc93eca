//! Check outcome types.
//!
//! Every check produces a value describing what was found. Nothing here is
//! an error: a missing tool is an ordinary outcome that gets printed.

use crate::checks::version::Version;

/// The result of checking a single tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolStatus {
    /// No executable of that name on the search path. The version command
    /// was not run.
    NotInstalled,

    /// Installed and at least the minimum version.
    Satisfied {
        /// Version read from the command output.
        found: Version,
    },

    /// Installed, but older than the minimum or the version could not be
    /// determined (command failed, no numeric output).
    BelowMinimum {
        /// Version read from the command output, if any.
        found: Option<Version>,
    },
}

impl ToolStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ToolStatus::Satisfied { .. })
    }
}

/// Outcome for one configured tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolReport {
    /// Tool name as configured.
    pub name: String,
    /// Minimum version as configured.
    pub min_version: String,
    pub status: ToolStatus,
}

/// Whether a package could be imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    Installed,
    NotInstalled,
}

/// Outcome for one configured package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub name: String,
    pub status: PackageStatus,
}

/// Outcome for one configured extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionResult {
    pub id: String,
    pub installed: bool,
}

/// Outcome of the extension section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionReport {
    /// The editor CLI could not be located, started, or exited non-zero.
    /// No individual extension was checked.
    CliUnavailable,

    /// The editor CLI listed its extensions; one entry per configured id.
    Listed(Vec<ExtensionResult>),
}

/// Counts across all sections of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Items that passed.
    pub ok: usize,
    /// Tools below minimum, or an unavailable editor CLI.
    pub warnings: usize,
    /// Tools, packages or extensions that are not installed.
    pub missing: usize,
}

impl Summary {
    pub fn record_tool(&mut self, report: &ToolReport) {
        match report.status {
            ToolStatus::Satisfied { .. } => self.ok += 1,
            ToolStatus::BelowMinimum { .. } => self.warnings += 1,
            ToolStatus::NotInstalled => self.missing += 1,
        }
    }

    pub fn record_package(&mut self, report: &PackageReport) {
        match report.status {
            PackageStatus::Installed => self.ok += 1,
            PackageStatus::NotInstalled => self.missing += 1,
        }
    }

    pub fn record_extensions(&mut self, report: &ExtensionReport) {
        match report {
            ExtensionReport::CliUnavailable => self.warnings += 1,
            ExtensionReport::Listed(results) => {
                for result in results {
                    if result.installed {
                        self.ok += 1;
                    } else {
                        self.missing += 1;
                    }
                }
            }
        }
    }

    /// Whether every check passed.
    pub fn all_ok(&self) -> bool {
        self.warnings == 0 && self.missing == 0
    }
}
