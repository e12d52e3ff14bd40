//! Host profiles.

use serde::Deserialize;
use std::fmt;

use crate::preflight::{HostInfo, HostOs};

/// Which built-in tool list and preconditions apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Pick from the host
    #[default]
    Auto,
    /// Windows, via winget (requires Administrator)
    Windows,
    /// A Linux distribution inside WSL, via apt-get
    Wsl,
    /// macOS, via Homebrew
    Macos,
    /// Debian/Ubuntu Linux, via apt-get
    Linux,
    /// No built-in tools; config file only
    Custom,
}

impl Profile {
    /// Replace `Auto` with the profile matching `host`.
    ///
    /// Hosts rigup has no catalog for resolve to `Custom`.
    pub fn resolve(self, host: &HostInfo) -> Profile {
        if self != Profile::Auto {
            return self;
        }
        match host.os {
            HostOs::Windows => Profile::Windows,
            HostOs::Linux if host.in_wsl => Profile::Wsl,
            HostOs::Linux => Profile::Linux,
            HostOs::MacOS => Profile::Macos,
            HostOs::Other => Profile::Custom,
        }
    }

    /// Lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Auto => "auto",
            Profile::Windows => "windows",
            Profile::Wsl => "wsl",
            Profile::Macos => "macos",
            Profile::Linux => "linux",
            Profile::Custom => "custom",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
