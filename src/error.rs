//! Error types for rigup operations.
//!
//! This module defines [`RigupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RigupError` for failures that end the run (bad config, failed preflight)
//! - Per-tool failures never surface here: probes report [`ProbeError`] and
//!   installers report [`InstallError`], both recovered by the provisioner
//! - Use `anyhow::Error` (via `RigupError::Other`) for unexpected errors
//!
//! [`ProbeError`]: crate::provision::ProbeError
//! [`InstallError`]: crate::provision::InstallError

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rigup operations.
#[derive(Debug, Error)]
pub enum RigupError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A host precondition does not hold; nothing was installed.
    #[error("Preflight check '{check}' failed: {message}")]
    PreconditionFailed {
        check: String,
        message: String,
        remediation: String,
    },

    /// Prompt could not be answered (non-interactive without default, closed stdin).
    #[error("Cannot prompt for '{key}': {message}")]
    PromptUnavailable { key: String, message: String },

    /// Shell command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigupError {
    /// Remediation text to show alongside the error, if any.
    pub fn remediation(&self) -> Option<&str> {
        match self {
            RigupError::PreconditionFailed { remediation, .. } => Some(remediation),
            _ => None,
        }
    }
}

/// Result type alias for rigup operations.
pub type Result<T> = std::result::Result<T, RigupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = RigupError::ConfigNotFound {
            path: PathBuf::from("/foo/rigup.yml"),
        };
        assert!(err.to_string().contains("/foo/rigup.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = RigupError::ConfigParseError {
            path: PathBuf::from("/rigup.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/rigup.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn precondition_failed_displays_check_and_message() {
        let err = RigupError::PreconditionFailed {
            check: "elevated".into(),
            message: "Administrator privileges are required".into(),
            remediation: "Re-run from an elevated PowerShell".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("elevated"));
        assert!(msg.contains("Administrator"));
        assert!(!msg.contains("elevated PowerShell"));
    }

    #[test]
    fn remediation_only_for_preconditions() {
        let err = RigupError::PreconditionFailed {
            check: "wsl".into(),
            message: "not inside WSL".into(),
            remediation: "Open your WSL distribution".into(),
        };
        assert_eq!(err.remediation(), Some("Open your WSL distribution"));

        let other = RigupError::ConfigValidationError {
            message: "bad".into(),
        };
        assert!(other.remediation().is_none());
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = RigupError::CommandFailed {
            command: "brew install git".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew install git"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RigupError = io_err.into();
        assert!(matches!(err, RigupError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: RigupError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
