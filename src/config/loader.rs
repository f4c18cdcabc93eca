//! Configuration file discovery and loading.
//!
//! Resolution order:
//! 1. An explicit path (`--config` / `DEVCHECK_CONFIG`), which must exist
//! 2. `.devcheck.yml` in the working directory, if present
//! 3. The built-in defaults

use crate::config::schema::DevcheckConfig;
use crate::config::validator::validate;
use crate::error::{DevcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".devcheck.yml";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line or through the environment.
    Explicit(PathBuf),
    /// `.devcheck.yml` found in the working directory.
    Discovered(PathBuf),
    /// No file; built-in tables.
    Builtin,
}

/// Find `.devcheck.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and validate the active configuration.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `explicit` does not exist, `ConfigParseError`
/// for malformed YAML and `ConfigValidationError` for invalid values.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
) -> Result<(DevcheckConfig, ConfigSource)> {
    let (config, source) = match explicit {
        Some(path) => (
            load_config_file(path)?,
            ConfigSource::Explicit(path.to_path_buf()),
        ),
        None => match find_config(cwd) {
            Some(path) => (load_config_file(&path)?, ConfigSource::Discovered(path)),
            None => (DevcheckConfig::default(), ConfigSource::Builtin),
        },
    };

    validate(&config)?;
    tracing::debug!("Using configuration from {:?}", source);
    Ok((config, source))
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<DevcheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DevcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DevcheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`DevcheckConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DevcheckConfig> {
    if content.trim().is_empty() {
        return Ok(DevcheckConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DevcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
