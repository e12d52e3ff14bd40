//! Tool specifications and the capabilities they are built from.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Reports whether a tool is already present.
///
/// Implementations must not change the machine: a probe may run a
/// read-only command or look at the filesystem, nothing more.
pub trait Probe {
    /// Whether the tool is present.
    ///
    /// An `Err` means the probe itself broke; callers treat it as absent.
    fn is_present(&self) -> Result<bool, ProbeError>;

    /// Short human-readable description (e.g. "git on PATH").
    fn describe(&self) -> String;
}

/// Installs a tool through some external mechanism.
pub trait Installer {
    /// Run the install, blocking until it finishes.
    fn install(&self, options: &InstallOptions) -> Result<(), InstallError>;

    /// Short human-readable description (e.g. "brew install git").
    fn describe(&self) -> String;
}

/// Options forwarded to every installer in a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Let installer output through to the terminal instead of capturing it.
    pub stream_output: bool,
}

/// A probe broke while checking for a tool.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe command could not be started.
    #[error("could not run '{command}'")]
    Spawn { command: String },

    /// The filesystem could not be queried.
    #[error("could not inspect {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An installer did not complete.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The package manager this install relies on is not on the machine.
    #[error("{manager} is not available")]
    ManagerUnavailable { manager: String },

    /// The install command could not be started.
    #[error("could not start '{command}'")]
    Spawn { command: String },

    /// The install command ran and reported failure.
    #[error("'{command}' exited with code {code:?}")]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

impl InstallError {
    /// Captured output worth showing, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            InstallError::Failed { output, .. } if !output.is_empty() => Some(output),
            _ => None,
        }
    }
}

/// One installable tool.
pub struct ToolSpec {
    /// Human-readable identifier.
    pub name: String,
    /// Presence probe.
    pub detect: Box<dyn Probe>,
    /// Install action, only invoked when `detect` reports absence.
    pub install: Box<dyn Installer>,
    /// Guidance shown when the install fails or cannot be attempted.
    pub fallback: String,
}

impl ToolSpec {
    /// Create a tool spec.
    pub fn new(
        name: impl Into<String>,
        detect: Box<dyn Probe>,
        install: Box<dyn Installer>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            detect,
            install,
            fallback: fallback.into(),
        }
    }

    /// Run the probe. A probe error counts as absent and is logged.
    pub fn is_present(&self) -> bool {
        match self.detect.is_present() {
            Ok(present) => present,
            Err(e) => {
                tracing::warn!(
                    "Detection for {} failed ({}); treating it as absent",
                    self.name,
                    e
                );
                false
            }
        }
    }
}

impl fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("detect", &self.detect.describe())
            .field("install", &self.install.describe())
            .field("fallback", &self.fallback)
            .finish()
    }
}
