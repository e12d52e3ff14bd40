//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::Profile;

/// rigup - Bootstrap a development machine.
#[derive(Debug, Parser)]
#[command(name = "rigup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./rigup.yml and ~/.rigup/config.yml)
    #[arg(short, long, global = true, env = "RIGUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tool profile (default: detect from the host)
    #[arg(long, global = true, value_enum)]
    pub profile: Option<Profile>,

    /// Show verbose output, including installer output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install missing tools (default if no command specified)
    Install(InstallArgs),

    /// Report which tools are present, without installing anything
    Check(CheckArgs),

    /// List the tools of the selected profile
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Tool selection shared by several commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ToolFilter {
    /// Only these tools (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these tools (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub filter: ToolFilter,

    /// Install without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Never prompt
    #[arg(long)]
    pub non_interactive: bool,

    /// Skip host precondition checks
    #[arg(long)]
    pub skip_preflight: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub filter: ToolFilter,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: ToolFilter,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
