//! Shell command execution and host platform queries.

pub mod command;
pub mod platform;

pub use command::{execute, execute_check, CommandOptions, CommandResult};
pub use platform::{find_on_path, is_ci, is_elevated, parse_system_path};
