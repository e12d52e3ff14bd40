//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for state shared by every command of one invocation
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::cell::OnceCell;

use crate::catalog::{Profile, ToolPlan};
use crate::cli::args::{Cli, Commands, InstallArgs, ToolFilter};
use crate::config::RigupConfig;
use crate::error::Result;
use crate::preflight::HostInfo;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Config, profile selection and host facts for one invocation.
///
/// The host is probed lazily, on first use.
#[derive(Debug, Default)]
pub struct CommandContext {
    config: RigupConfig,
    profile_override: Option<Profile>,
    host: OnceCell<HostInfo>,
}

impl CommandContext {
    /// Create a context from the loaded config and the `--profile` flag.
    pub fn new(config: RigupConfig, profile_override: Option<Profile>) -> Self {
        Self {
            config,
            profile_override,
            host: OnceCell::new(),
        }
    }

    /// Use a known host instead of probing the machine.
    pub fn with_host(self, host: HostInfo) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(host);
        Self { host: cell, ..self }
    }

    /// Host facts.
    pub fn host(&self) -> &HostInfo {
        self.host.get_or_init(HostInfo::detect)
    }

    /// The effective profile: `--profile`, then config, then auto-detection.
    pub fn profile(&self) -> Profile {
        self.profile_override
            .or(self.config.profile)
            .unwrap_or_default()
            .resolve(self.host())
    }

    /// The filtered tool plan for the effective profile.
    pub fn plan(&self, filter: &ToolFilter) -> Result<ToolPlan> {
        let profile = self.profile();
        tracing::debug!("Using profile {}", profile);
        ToolPlan::assemble(profile, &self.config.disable, &self.config.tools)
            .filter(&filter.only, &filter.skip)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
    interactive: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext, interactive: bool) -> Self {
        Self {
            context,
            interactive,
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(&self.context, args.clone(), self.interactive);
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to install with default args
                let cmd = super::install::InstallCommand::new(
                    &self.context,
                    InstallArgs::default(),
                    self.interactive,
                );
                cmd.execute(ui)
            }
        }
    }
}
