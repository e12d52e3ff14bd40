//! Host detection.
//!
//! Gathers the facts preflight checks need: operating system, elevation,
//! Windows build number, and whether we are running inside WSL.

use regex::Regex;
use std::fmt;

use crate::shell::{self, CommandOptions};

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOS,
    Linux,
    Other,
}

impl HostOs {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::MacOS
        } else if cfg!(target_os = "linux") {
            HostOs::Linux
        } else {
            HostOs::Other
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostOs::Windows => "Windows",
            HostOs::MacOS => "macOS",
            HostOs::Linux => "Linux",
            HostOs::Other => "an unsupported OS",
        };
        f.write_str(name)
    }
}

/// Facts about the machine rigup is running on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// Operating system family.
    pub os: HostOs,
    /// Running as root / Administrator.
    pub elevated: bool,
    /// Windows build number (e.g. 19045), when on Windows and detectable.
    pub windows_build: Option<u32>,
    /// Running inside a WSL distribution.
    pub in_wsl: bool,
}

impl HostInfo {
    /// Probe the current machine.
    pub fn detect() -> Self {
        let os = HostOs::current();
        let windows_build = if os == HostOs::Windows {
            detect_windows_build()
        } else {
            None
        };
        let in_wsl = os == HostOs::Linux
            && detect_wsl(
                |key| std::env::var(key),
                std::fs::read_to_string("/proc/version").ok().as_deref(),
            );

        let info = Self {
            os,
            elevated: shell::is_elevated(),
            windows_build,
            in_wsl,
        };
        tracing::debug!("Detected host: {:?}", info);
        info
    }
}

/// Decide whether we are inside WSL.
///
/// `WSL_DISTRO_NAME` is set by WSL for every process it starts; the kernel
/// version string mentions Microsoft on both WSL 1 and WSL 2.
pub fn detect_wsl<F>(env_fn: F, proc_version: Option<&str>) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if env_fn("WSL_DISTRO_NAME").is_ok_and(|v| !v.is_empty()) {
        return true;
    }
    proc_version.is_some_and(|v| v.to_lowercase().contains("microsoft"))
}

fn detect_windows_build() -> Option<u32> {
    let result = shell::execute("ver", &CommandOptions::captured()).ok()?;
    parse_windows_build(&result.stdout)
}

/// Extract the build number from `ver` output.
///
/// `Microsoft Windows [Version 10.0.19045.3803]` yields `19045`. The word
/// "Version" is localized, so only the bracketed dotted number is matched.
pub fn parse_windows_build(ver_output: &str) -> Option<u32> {
    let re = Regex::new(r"\[[^\]\d]*(\d+)\.(\d+)\.(\d+)").ok()?;
    let caps = re.captures(ver_output)?;
    caps.get(3)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn parses_english_ver_output() {
        let out = "\r\nMicrosoft Windows [Version 10.0.19045.3803]\r\n";
        assert_eq!(parse_windows_build(out), Some(19045));
    }

    #[test]
    fn parses_localized_ver_output() {
        let out = "Microsoft Windows [version 10.0.22631.2861]";
        assert_eq!(parse_windows_build(out), Some(22631));
    }

    #[test]
    fn parses_build_without_revision() {
        assert_eq!(parse_windows_build("[Version 10.0.17763]"), Some(17763));
    }

    #[test]
    fn unparseable_ver_output() {
        assert_eq!(parse_windows_build("command not found"), None);
    }

    #[test]
    fn wsl_from_env_var() {
        assert!(detect_wsl(make_env(&[("WSL_DISTRO_NAME", "Ubuntu")]), None));
    }

    #[test]
    fn wsl_from_proc_version() {
        let version = "Linux version 5.15.133.1-microsoft-standard-WSL2 (root@1c602f52c2e4)";
        assert!(detect_wsl(make_env(&[]), Some(version)));
    }

    #[test]
    fn plain_linux_is_not_wsl() {
        let version = "Linux version 6.5.0-14-generic (buildd@lcy02-amd64-031)";
        assert!(!detect_wsl(make_env(&[("WSL_DISTRO_NAME", "")]), Some(version)));
    }

    #[test]
    fn host_os_display() {
        assert_eq!(HostOs::MacOS.to_string(), "macOS");
        assert_eq!(HostOs::Windows.to_string(), "Windows");
    }
}
