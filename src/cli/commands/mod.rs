//! CLI command implementations.
//!
//! The single check run implements the [`Command`] trait and is reached
//! through [`CommandDispatcher`], which resolves configuration first.

pub mod check;
pub mod dispatcher;
pub mod display;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
