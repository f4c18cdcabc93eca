//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output,
//! both per kind and as the plain lines a terminal would show.
//!
//! # Example
//!
//! ```
//! use devcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("numpy is NOT installed.");
//!
//! assert!(ui.has_error("numpy"));
//! assert_eq!(ui.lines(), ["❌ numpy is NOT installed."]);
//! ```

use super::{StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    lines: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    sections: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line in output order, rendered without styling.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured section headers.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.sections.clear();
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.lines.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.lines.push(StatusKind::Success.format_plain(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.lines.push(StatusKind::Warning.format_plain(msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.lines.push(StatusKind::Failed.format_plain(msg));
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
        self.lines.push(title.to_string());
    }
}
