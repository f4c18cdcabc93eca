//! Error types for devcheck operations.
//!
//! This module defines [`DevcheckError`], the error type used for failures
//! that stop a run before any check executes, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Check outcomes (missing tool, old version, absent package) are values,
//!   not errors; see [`crate::checks`]
//! - Use `DevcheckError` for configuration and process errors
//! - Use `anyhow::Error` (via `DevcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devcheck operations.
#[derive(Debug, Error)]
pub enum DevcheckError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External command could not be run or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devcheck operations.
pub type Result<T> = std::result::Result<T, DevcheckError>;
