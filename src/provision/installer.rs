//! Built-in installers.
//!
//! Package installs go through [`PackageInstall`], which first makes sure
//! the package manager exists. An absent manager is an ordinary install
//! failure; the provisioner then shows the tool's fallback guidance.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use crate::shell::{self, CommandOptions};

use super::spec::{InstallError, InstallOptions, Installer};

/// External package managers rigup knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// Windows Package Manager.
    Winget,
    /// Debian/Ubuntu `apt-get`.
    Apt,
    /// Homebrew.
    Brew,
}

impl PackageManager {
    /// Executable name.
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Winget => "winget",
            PackageManager::Apt => "apt-get",
            PackageManager::Brew => "brew",
        }
    }

    /// How to invoke the manager, if it is installed.
    ///
    /// Managers on PATH are invoked by name. Homebrew is also looked up at
    /// its default prefixes, since a fresh install is not on PATH until the
    /// shell is restarted.
    pub fn invocation(&self) -> Option<String> {
        if shell::find_on_path(self.binary()).is_some() {
            return Some(self.binary().to_string());
        }
        if *self == PackageManager::Brew {
            return homebrew_default_prefixes()
                .into_iter()
                .map(|prefix| prefix.join("bin/brew"))
                .find(|brew| brew.is_file() && shell::platform::is_executable(brew))
                .map(|brew| brew.to_string_lossy().into_owned());
        }
        None
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

fn homebrew_default_prefixes() -> Vec<PathBuf> {
    let mut prefixes = Vec::new();
    if cfg!(target_os = "macos") {
        prefixes.push(PathBuf::from("/opt/homebrew"));
        prefixes.push(PathBuf::from("/usr/local"));
    } else if cfg!(target_os = "linux") {
        prefixes.push(PathBuf::from("/home/linuxbrew/.linuxbrew"));
    }
    prefixes
}

/// Tracks whether the apt package index was refreshed during this run.
///
/// Shared by every apt install built for one run so `apt-get update` runs
/// at most once, right before the first apt install.
#[derive(Debug, Clone, Default)]
pub struct AptIndex(Rc<Cell<bool>>);

impl AptIndex {
    /// Whether `apt-get update` already succeeded in this run.
    pub fn is_fresh(&self) -> bool {
        self.0.get()
    }

    fn mark_fresh(&self) {
        self.0.set(true);
    }
}

/// Install a package through a package manager.
#[derive(Debug, Clone)]
pub struct PackageInstall {
    manager: PackageManager,
    package: String,
    use_sudo: bool,
    apt_index: AptIndex,
}

impl PackageInstall {
    /// Install `package` with `manager`.
    pub fn new(manager: PackageManager, package: impl Into<String>) -> Self {
        Self {
            manager,
            package: package.into(),
            use_sudo: false,
            apt_index: AptIndex::default(),
        }
    }

    /// Prefix privileged commands with `sudo` (apt only).
    pub fn with_sudo(mut self, use_sudo: bool) -> Self {
        self.use_sudo = use_sudo;
        self
    }

    /// Share an apt index tracker with other installs of the same run.
    pub fn with_apt_index(mut self, index: AptIndex) -> Self {
        self.apt_index = index;
        self
    }

    fn sudo_prefix(&self) -> &'static str {
        if self.use_sudo {
            "sudo "
        } else {
            ""
        }
    }

    /// The command line this installer runs, given how the manager is invoked.
    pub fn command_line(&self, manager_exe: &str) -> String {
        match self.manager {
            PackageManager::Winget => format!(
                "{} install --id {} --exact --silent --accept-package-agreements --accept-source-agreements",
                manager_exe, self.package
            ),
            PackageManager::Apt => format!(
                "{}{} install -y {}",
                self.sudo_prefix(),
                manager_exe,
                self.package
            ),
            PackageManager::Brew => format!("{} install {}", manager_exe, self.package),
        }
    }

    fn environment(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();
        match self.manager {
            PackageManager::Apt => {
                env.insert("DEBIAN_FRONTEND".to_string(), "noninteractive".to_string());
            }
            PackageManager::Brew => {
                env.insert("HOMEBREW_NO_ENV_HINTS".to_string(), "1".to_string());
            }
            PackageManager::Winget => {}
        }
        env
    }

    fn refresh_apt_index(&self, exe: &str, options: &InstallOptions) -> Result<(), InstallError> {
        if self.apt_index.is_fresh() {
            return Ok(());
        }
        let command = format!("{}{} update", self.sudo_prefix(), exe);
        run_command(&command, self.environment(), options)?;
        self.apt_index.mark_fresh();
        Ok(())
    }
}

impl Installer for PackageInstall {
    fn install(&self, options: &InstallOptions) -> Result<(), InstallError> {
        let exe = self
            .manager
            .invocation()
            .ok_or_else(|| InstallError::ManagerUnavailable {
                manager: self.manager.to_string(),
            })?;

        if self.manager == PackageManager::Apt {
            self.refresh_apt_index(&exe, options)?;
        }

        run_command(&self.command_line(&exe), self.environment(), options)
    }

    fn describe(&self) -> String {
        self.command_line(self.manager.binary())
    }
}

/// Install by running an arbitrary shell command.
#[derive(Debug, Clone)]
pub struct ShellInstall {
    command: String,
}

impl ShellInstall {
    /// Install by running `command`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Installer for ShellInstall {
    fn install(&self, options: &InstallOptions) -> Result<(), InstallError> {
        run_command(&self.command, HashMap::new(), options)
    }

    fn describe(&self) -> String {
        self.command.clone()
    }
}

fn run_command(
    command: &str,
    env: HashMap<String, String>,
    options: &InstallOptions,
) -> Result<(), InstallError> {
    let command_options = CommandOptions {
        env,
        capture_stdout: !options.stream_output,
        capture_stderr: !options.stream_output,
    };

    let result = shell::execute(command, &command_options).map_err(|_| InstallError::Spawn {
        command: command.to_string(),
    })?;

    if result.success {
        tracing::debug!("'{}' finished in {:?}", command, result.duration);
        Ok(())
    } else {
        Err(InstallError::Failed {
            command: command.to_string(),
            code: result.exit_code,
            output: result.output_tail(5),
        })
    }
}
