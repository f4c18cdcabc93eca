//! Configuration validation rules.
//!
//! - Tool names and commands must be non-empty
//! - Minimum versions must parse under the configured scheme
//! - Package names must be dotted identifiers, since they are spliced into
//!   an import statement
//! - Interpreter and editor CLI must be non-empty

use crate::config::schema::DevcheckConfig;
use crate::error::{DevcheckError, Result};
use regex::Regex;
use std::sync::LazyLock;

static MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &DevcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_tools(config));
    errors.extend(validate_packages(config));
    errors.extend(validate_extensions(config));

    errors
}

fn validate_tools(config: &DevcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, tool) in config.tools.iter().enumerate() {
        if tool.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-tool-name",
                format!("Tool #{} has an empty name", index + 1),
            ));
        }
        if tool.command.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-tool-command",
                format!("Tool '{}' has an empty version command", tool.name),
            ));
        }
        if config
            .version_scheme
            .parse_minimum(&tool.min_version)
            .is_none()
        {
            errors.push(ValidationError::new(
                "invalid-min-version",
                format!(
                    "Tool '{}' has minimum version '{}' which is not a valid {} version",
                    tool.name, tool.min_version, config.version_scheme
                ),
            ));
        }
    }

    errors
}

fn validate_packages(config: &DevcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.packages.interpreter.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-interpreter",
            "Package interpreter must not be empty".to_string(),
        ));
    }
    for name in &config.packages.names {
        if !MODULE_NAME.is_match(name) {
            errors.push(ValidationError::new(
                "invalid-package-name",
                format!("Package '{}' is not a valid module name", name),
            ));
        }
    }

    errors
}

fn validate_extensions(config: &DevcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.extensions.cli.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-editor-cli",
            "Editor CLI must not be empty".to_string(),
        ));
    }
    for id in &config.extensions.ids {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-extension-id",
                "Extension identifiers must not be empty".to_string(),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &DevcheckConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(DevcheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::version::VersionScheme;
    use crate::config::schema::ToolSpec;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&DevcheckConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_tool_name_and_command() {
        let mut config = DevcheckConfig::default();
        config.tools = vec![ToolSpec::new(" ", "", "1.0")];

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "empty-tool-name"));
        assert!(errors.iter().any(|e| e.rule == "empty-tool-command"));
    }

    #[test]
    fn rejects_min_version_invalid_for_scheme() {
        let mut config = DevcheckConfig::default();
        config.tools = vec![ToolSpec::new("node", "node --version", "20.1.0")];

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "invalid-min-version"));

        config.version_scheme = VersionScheme::Dotted;
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn rejects_package_names_that_are_not_identifiers() {
        let mut config = DevcheckConfig::default();
        config.packages.names = vec![
            "os.path".to_string(),
            "numpy; import shutil".to_string(),
            "1abc".to_string(),
        ];

        let errors: Vec<_> = validate_config(&config)
            .into_iter()
            .filter(|e| e.rule == "invalid-package-name")
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("numpy; import shutil"));
    }

    #[test]
    fn rejects_empty_interpreter_and_cli() {
        let mut config = DevcheckConfig::default();
        config.packages.interpreter = String::new();
        config.extensions.cli = String::new();
        config.extensions.ids.push(" ".to_string());

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "empty-interpreter"));
        assert!(errors.iter().any(|e| e.rule == "empty-editor-cli"));
        assert!(errors.iter().any(|e| e.rule == "empty-extension-id"));
    }

    #[test]
    fn validate_joins_messages() {
        let mut config = DevcheckConfig::default();
        config.packages.interpreter = String::new();
        config.extensions.cli = String::new();

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("interpreter"));
        assert!(msg.contains("; "));
    }
}
