//! Preconditions checked once before provisioning.
//!
//! Each profile declares what the host must look like before any installer
//! runs. The first unmet precondition aborts the run with remediation text.

pub mod host;

pub use host::{HostInfo, HostOs};

use crate::catalog::Profile;
use crate::error::{Result, RigupError};

/// Oldest Windows build that supports `wsl --install`.
pub const MIN_WINDOWS_BUILD: u32 = 19041;

/// A single host requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The host runs this OS family.
    HostOs(HostOs),
    /// Running as root / Administrator.
    Elevated,
    /// Not running as root.
    NotRoot,
    /// Windows build at or above the given number.
    MinWindowsBuild(u32),
    /// Running inside a WSL distribution.
    InsideWsl,
}

impl Precondition {
    /// Short identifier shown in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Precondition::HostOs(_) => "host-os",
            Precondition::Elevated => "elevated",
            Precondition::NotRoot => "not-root",
            Precondition::MinWindowsBuild(_) => "windows-build",
            Precondition::InsideWsl => "inside-wsl",
        }
    }

    /// Check the precondition against `host`.
    pub fn evaluate(&self, host: &HostInfo) -> Result<()> {
        match *self {
            Precondition::HostOs(os) if host.os != os => Err(self.failure(
                format!("this profile needs {}, but the host is {}", os, host.os),
                "Pick the profile for this machine with --profile, or use --profile auto",
            )),
            Precondition::Elevated if !host.elevated => Err(self.failure(
                "rigup is not running as Administrator",
                "Re-run from a terminal opened with \"Run as administrator\"",
            )),
            Precondition::NotRoot if host.elevated => Err(self.failure(
                "rigup is running as root",
                "Re-run as a regular user; Homebrew refuses to run as root",
            )),
            Precondition::MinWindowsBuild(min) => match host.windows_build {
                Some(build) if build < min => Err(self.failure(
                    format!("Windows build {} is older than {}", build, min),
                    "Update Windows (Settings > Windows Update), then re-run rigup",
                )),
                Some(_) => Ok(()),
                None => {
                    tracing::warn!("Could not determine the Windows build; assuming it is recent enough");
                    Ok(())
                }
            },
            Precondition::InsideWsl if !host.in_wsl => Err(self.failure(
                "not running inside WSL",
                "Open your WSL distribution (e.g. `wsl -d Ubuntu`) and run rigup there",
            )),
            _ => Ok(()),
        }
    }

    fn failure(&self, message: impl Into<String>, remediation: &str) -> RigupError {
        RigupError::PreconditionFailed {
            check: self.name().to_string(),
            message: message.into(),
            remediation: remediation.to_string(),
        }
    }
}

/// Preconditions for a resolved profile, in evaluation order.
pub fn preconditions(profile: Profile) -> Vec<Precondition> {
    match profile {
        Profile::Windows => vec![
            Precondition::HostOs(HostOs::Windows),
            Precondition::Elevated,
            Precondition::MinWindowsBuild(MIN_WINDOWS_BUILD),
        ],
        Profile::Wsl => vec![Precondition::HostOs(HostOs::Linux), Precondition::InsideWsl],
        Profile::Linux => vec![Precondition::HostOs(HostOs::Linux)],
        Profile::Macos => vec![Precondition::HostOs(HostOs::MacOS), Precondition::NotRoot],
        Profile::Custom | Profile::Auto => Vec::new(),
    }
}

/// Evaluate every precondition of `profile`, stopping at the first failure.
pub fn check(profile: Profile, host: &HostInfo) -> Result<()> {
    for precondition in preconditions(profile) {
        tracing::debug!("Preflight: {}", precondition.name());
        precondition.evaluate(host)?;
    }
    Ok(())
}
