//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands them a shared
//! [`CommandContext`] (loaded config, profile selection, host facts).

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod list;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
