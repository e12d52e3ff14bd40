//! Built-in presence probes.

use std::path::{Path, PathBuf};

use crate::shell::{self, CommandOptions};

use super::spec::{Probe, ProbeError};

/// Present when a binary is found on PATH.
#[derive(Debug, Clone)]
pub struct OnPath {
    binary: String,
}

impl OnPath {
    /// Probe for `binary` on the current PATH.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Probe for OnPath {
    fn is_present(&self) -> Result<bool, ProbeError> {
        let found = shell::find_on_path(&self.binary);
        tracing::debug!("PATH lookup for {}: {:?}", self.binary, found);
        Ok(found.is_some())
    }

    fn describe(&self) -> String {
        format!("{} on PATH", self.binary)
    }
}

/// Present when a shell command exits 0.
#[derive(Debug, Clone)]
pub struct CommandSucceeds {
    command: String,
}

impl CommandSucceeds {
    /// Probe by running `command` with output captured.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Probe for CommandSucceeds {
    fn is_present(&self) -> Result<bool, ProbeError> {
        let result = shell::execute(&self.command, &CommandOptions::captured()).map_err(|_| {
            ProbeError::Spawn {
                command: self.command.clone(),
            }
        })?;
        tracing::debug!("Probe '{}' exited with {:?}", self.command, result.exit_code);
        Ok(result.success)
    }

    fn describe(&self) -> String {
        format!("`{}` succeeds", self.command)
    }
}

/// Present when a file or directory exists.
///
/// A leading `~/` is expanded to the user's home directory.
#[derive(Debug, Clone)]
pub struct FileExists {
    path: PathBuf,
}

impl FileExists {
    /// Probe for `path`.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: expand_home(path.as_ref()),
        }
    }

    /// The resolved path being probed.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Probe for FileExists {
    fn is_present(&self) -> Result<bool, ProbeError> {
        self.path.try_exists().map_err(|source| ProbeError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("{} exists", self.path.display())
    }
}

/// Present when any inner probe reports presence.
///
/// Inner probe errors only surface when no other probe found the tool.
pub struct AnyOf {
    probes: Vec<Box<dyn Probe>>,
}

impl AnyOf {
    /// Combine probes.
    pub fn new(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }
}

impl Probe for AnyOf {
    fn is_present(&self) -> Result<bool, ProbeError> {
        let mut first_error = None;
        for probe in &self.probes {
            match probe.is_present() {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(false),
        }
    }

    fn describe(&self) -> String {
        self.probes
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Broken;

    impl Probe for Broken {
        fn is_present(&self) -> Result<bool, ProbeError> {
            Err(ProbeError::Spawn {
                command: "broken".to_string(),
            })
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    fn command_succeeds_reflects_exit_status() {
        assert!(CommandSucceeds::new("exit 0").is_present().unwrap());
        assert!(!CommandSucceeds::new("exit 7").is_present().unwrap());
    }

    #[test]
    fn on_path_misses_unknown_binary() {
        let probe = OnPath::new("rigup-definitely-not-installed");
        assert!(!probe.is_present().unwrap());
        assert_eq!(probe.describe(), "rigup-definitely-not-installed on PATH");
    }

    #[cfg(unix)]
    #[test]
    fn on_path_finds_sh() {
        assert!(OnPath::new("sh").is_present().unwrap());
    }

    #[test]
    fn file_exists_checks_filesystem() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("marker");
        let probe = FileExists::new(file.to_string_lossy());
        assert!(!probe.is_present().unwrap());

        std::fs::write(&file, "").unwrap();
        assert!(probe.is_present().unwrap());
    }

    #[test]
    fn file_exists_expands_home() {
        let probe = FileExists::new("~/.rustup");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(probe.path(), home.join(".rustup"));
        }
    }

    #[test]
    fn any_of_short_circuits_on_presence() {
        let probe = AnyOf::new(vec![
            Box::new(Broken),
            Box::new(CommandSucceeds::new("exit 0")),
        ]);
        assert!(probe.is_present().unwrap());
    }

    #[test]
    fn any_of_reports_error_when_nothing_found() {
        let probe = AnyOf::new(vec![
            Box::new(CommandSucceeds::new("exit 1")),
            Box::new(Broken),
        ]);
        assert!(probe.is_present().is_err());
    }

    #[test]
    fn any_of_absent_without_errors() {
        let probe = AnyOf::new(vec![Box::new(CommandSucceeds::new("exit 1"))]);
        assert!(!probe.is_present().unwrap());
    }

    #[test]
    fn any_of_describe_joins() {
        let probe = AnyOf::new(vec![
            Box::new(OnPath::new("brew")),
            Box::new(FileExists::new("/opt/homebrew/bin/brew")),
        ]);
        assert_eq!(
            probe.describe(),
            "brew on PATH or /opt/homebrew/bin/brew exists"
        );
    }
}
