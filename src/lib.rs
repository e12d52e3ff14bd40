//! rigup - Idempotent development machine provisioning.
//!
//! rigup walks an ordered list of tools, checks which ones are already
//! present, installs the missing ones through the host's package manager
//! (winget, apt-get, Homebrew), and keeps going when a single install fails.
//!
//! # Modules
//!
//! - [`catalog`] - Built-in tool lists per host profile, and plan assembly
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`preflight`] - Host detection and precondition checks
//! - [`provision`] - Tool specs, probes, installers and the provisioning loop
//! - [`shell`] - Shell command execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use rigup::catalog::{BuildContext, DetectDef, InstallDef, Profile, ToolDef, ToolPlan};
//! use rigup::provision::{Provisioner, ProvisionResult};
//! use rigup::ui::MockUI;
//!
//! let extra = vec![ToolDef::new(
//!     "shell",
//!     DetectDef::Command("exit 0".into()),
//!     InstallDef::Script("exit 1".into()),
//!     "Install a POSIX shell",
//! )];
//! let plan = ToolPlan::assemble(Profile::Custom, &[], &extra);
//! let specs = plan.build(&BuildContext::default());
//!
//! let mut ui = MockUI::new();
//! let report = Provisioner::new(&mut ui).run(&specs, false).unwrap();
//! assert_eq!(report.outcomes(), vec![&ProvisionResult::AlreadyPresent]);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod preflight;
pub mod provision;
pub mod shell;
pub mod ui;

pub use error::{Result, RigupError};
