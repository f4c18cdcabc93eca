//! Configuration schema types.
//!
//! Every section is optional in YAML; omitted sections fall back to the
//! built-in tables returned by [`DevcheckConfig::default`].

use crate::checks::version::VersionScheme;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevcheckConfig {
    /// How tool versions are extracted and compared.
    pub version_scheme: VersionScheme,

    /// Tools checked for presence and minimum version, in order.
    pub tools: Vec<ToolSpec>,

    /// Language packages checked for importability.
    pub packages: PackageConfig,

    /// Editor extensions checked through the editor CLI.
    pub extensions: ExtensionConfig,
}

impl Default for DevcheckConfig {
    fn default() -> Self {
        Self {
            version_scheme: VersionScheme::default(),
            tools: default_tools(),
            packages: PackageConfig::default(),
            extensions: ExtensionConfig::default(),
        }
    }
}

/// A tool descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSpec {
    /// Executable name looked up on the search path.
    pub name: String,

    /// Command printing the tool's version, split on whitespace.
    pub command: String,

    /// Minimum acceptable version.
    pub min_version: String,
}

impl ToolSpec {
    pub fn new(name: &str, command: &str, min_version: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            min_version: min_version.to_string(),
        }
    }
}

fn default_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("git", "git --version", "2.0"),
        ToolSpec::new("python3", "python3 --version", "3.11"),
        ToolSpec::new("uv", "uv --version", "0.7"),
        ToolSpec::new("code", "code --version", "1.99"),
    ]
}

/// Package presence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    /// Language name shown in the section header.
    pub language: String,

    /// Interpreter used to attempt each import.
    pub interpreter: String,

    /// Importable module names.
    pub names: Vec<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            language: "Python".to_string(),
            interpreter: "python3".to_string(),
            names: vec![
                "numpy".to_string(),
                "pandas".to_string(),
                "streamlit".to_string(),
            ],
        }
    }
}

/// Editor extension settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionConfig {
    /// Editor name shown in messages.
    pub display_name: String,

    /// Editor CLI shim invoked with `--list-extensions`.
    pub cli: String,

    /// Extension identifiers that must be installed.
    pub ids: Vec<String>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            display_name: "VS Code".to_string(),
            cli: "code".to_string(),
            ids: vec![
                "ms-python.python".to_string(),
                "ms-toolsai.jupyter".to_string(),
                "charliermarsh.ruff".to_string(),
                "ms-vscode.vscode-pylance".to_string(),
            ],
        }
    }
}
