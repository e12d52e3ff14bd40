//! Command-line interface for rigup.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InstallArgs, ListArgs, ToolFilter};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
