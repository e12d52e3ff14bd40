//! Idempotent tool provisioning.
//!
//! A run walks an ordered list of [`ToolSpec`]s. Each spec is probed, and
//! installed only when the probe reports it absent. A failed install is
//! reported with the tool's fallback guidance and the run moves on to the
//! next tool.
//!
//! # Modules
//!
//! - [`spec`] - [`ToolSpec`] and the [`Probe`] / [`Installer`] capabilities
//! - [`probe`] - Built-in probes (PATH lookup, command exit status, file existence)
//! - [`installer`] - Built-in installers (winget, apt-get, brew, shell scripts)
//! - [`result`] - Per-tool outcomes and the run report
//! - [`provisioner`] - The sequencing loop
//!
//! # Example
//!
//! ```
//! use rigup::provision::{Provisioner, ProvisionResult, ToolSpec};
//! use rigup::provision::probe::CommandSucceeds;
//! use rigup::provision::installer::ShellInstall;
//! use rigup::ui::MockUI;
//!
//! let specs = vec![ToolSpec::new(
//!     "shell",
//!     Box::new(CommandSucceeds::new("exit 0")),
//!     Box::new(ShellInstall::new("exit 1")),
//!     "Install a POSIX shell",
//! )];
//!
//! let mut ui = MockUI::new();
//! let report = Provisioner::new(&mut ui).run(&specs, false).unwrap();
//! assert_eq!(report.results()[0].result, ProvisionResult::AlreadyPresent);
//! ```

pub mod installer;
pub mod probe;
pub mod provisioner;
pub mod result;
pub mod spec;

pub use provisioner::{Provisioner, CONFIRM_PROMPT_KEY};
pub use result::{ProvisionReport, ProvisionResult, ToolOutcome};
pub use spec::{InstallError, InstallOptions, Installer, Probe, ProbeError, ToolSpec};
