//! Terminal output for check results.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled lines to stdout
//! - [`MockUI`] capturing output for tests
//! - [`StatusKind`] glyphs and [`Theme`] styles
//!
//! # Example
//!
//! ```
//! use devcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("🔍 Checking system tools:");
//! ui.success("git is installed and version is OK.");
//! assert_eq!(
//!     ui.lines(),
//!     ["🔍 Checking system tools:", "✅ git is installed and version is OK."]
//! );
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display an unadorned line.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display a failure line.
    fn error(&mut self, msg: &str);

    /// Display a section header.
    fn show_section(&mut self, title: &str);
}
