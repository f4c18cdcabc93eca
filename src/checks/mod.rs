//! Environment checks.
//!
//! Three independent checks make up a run:
//!
//! - tools: present on the search path and at least a minimum version
//! - packages: importable by the language interpreter
//! - extensions: listed by the editor CLI
//!
//! # Modules
//!
//! - [`checker`] - The [`Checker`] that runs each check
//! - [`status`] - Outcome types and the run [`Summary`]
//! - [`version`] - Version extraction and comparison schemes

pub mod checker;
pub mod status;
pub mod version;

pub use checker::{parse_extension_list, Checker, LIST_EXTENSIONS_ARG};
pub use status::{
    ExtensionReport, ExtensionResult, PackageReport, PackageStatus, Summary, ToolReport,
    ToolStatus,
};
pub use version::{Version, VersionScheme};
