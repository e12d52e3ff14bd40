//! Host platform queries: CI detection, elevation, and PATH lookup.

use std::path::{Path, PathBuf};

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`,
/// `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// CI detection with a custom env var lookup (for testing).
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| env_fn(var).is_ok())
}

/// Check if running as root/Administrator.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        // `net session` is refused with "Access is denied" unless elevated.
        super::execute_check("net session")
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a binary on the current PATH.
pub fn find_on_path(binary: &str) -> Option<PathBuf> {
    resolve_tool_path(binary, &parse_system_path())
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. On Windows the
/// usual executable extensions are tried as well. Does NOT shell out to
/// `which`/`where`, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

fn candidate_names(tool: &str) -> Vec<String> {
    let mut names = vec![tool.to_string()];
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        for ext in ["exe", "cmd", "bat", "com"] {
            names.push(format!("{}.{}", tool, ext));
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn ci_detected_from_github_actions() {
        assert!(is_ci_with_env(make_env(&[("GITHUB_ACTIONS", "true")])));
    }

    #[test]
    fn ci_not_detected_without_vars() {
        assert!(!is_ci_with_env(make_env(&[("HOME", "/home/dev")])));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_finds_executable_in_path_entry() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("mytool");
        fs::write(&bin, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();

        let found = resolve_tool_path("mytool", &[temp.path().to_path_buf()]);
        assert_eq!(found, Some(bin));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_skips_non_executable_files() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("notexec");
        fs::write(&bin, "data").unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(resolve_tool_path("notexec", &[temp.path().to_path_buf()]).is_none());
    }

    #[test]
    fn resolve_returns_none_for_missing_tool() {
        let temp = TempDir::new().unwrap();
        assert!(resolve_tool_path("definitely-not-here", &[temp.path().to_path_buf()]).is_none());
    }

    #[test]
    fn resolve_ignores_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("git")).unwrap();
        assert!(resolve_tool_path("git", &[temp.path().to_path_buf()]).is_none());
    }
}
