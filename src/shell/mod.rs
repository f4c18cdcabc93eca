//! External process execution and executable lookup.

pub mod command;
pub mod path;

pub use command::{split_command, CommandOutput, CommandRunner, SystemRunner};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
