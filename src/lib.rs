//! devcheck - Development environment preflight checks.
//!
//! devcheck verifies that command-line tools are installed at a minimum
//! version, that language packages can be imported, and that editor
//! extensions are present, printing one status line per item.
//!
//! # Modules
//!
//! - [`checks`] - Tool, package and extension checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Built-in tables and YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Process execution and search path lookup
//! - [`ui`] - Status lines and terminal output
//!
//! # Example
//!
//! ```
//! use devcheck::checks::VersionScheme;
//!
//! let scheme = VersionScheme::Float;
//! let found = scheme.extract("git version 2.39.1").unwrap();
//! let minimum = scheme.parse_minimum("2.0").unwrap();
//! assert!(found.satisfies(&minimum));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{DevcheckError, Result};
