//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions and built-in tables in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use devcheck::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let config = parse_config("packages:\n  names: [json]\n", Path::new("inline.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.packages.names, vec!["json".to_string()]);
//! assert_eq!(config.tools.len(), 4);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_config, load_config, load_config_file, parse_config, ConfigSource, CONFIG_FILE_NAME,
};
pub use schema::{DevcheckConfig, ExtensionConfig, PackageConfig, ToolSpec};
pub use validator::{validate, validate_config, ValidationError};
