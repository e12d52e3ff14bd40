//! Configuration file discovery and loading.

use crate::config::schema::RigupConfig;
use crate::config::validator::validate;
use crate::error::{Result, RigupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate config file locations, in priority order.
///
/// 1. Project config (`./rigup.yml`)
/// 2. User global config (`~/.rigup/config.yml`)
///
/// Only the first existing file is used; files are not merged.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: ./rigup.yml
    pub project: Option<PathBuf>,

    /// User's global config: ~/.rigup/config.yml
    pub user_global: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files relative to `cwd`.
    pub fn discover(cwd: &Path) -> Self {
        Self {
            project: existing(cwd.join("rigup.yml")),
            user_global: dirs::home_dir().and_then(|home| existing(home.join(".rigup").join("config.yml"))),
        }
    }

    /// The file that will be loaded, if any.
    pub fn selected(&self) -> Option<&PathBuf> {
        self.project.as_ref().or(self.user_global.as_ref())
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// A loaded configuration and where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// Parsed and validated configuration.
    pub config: RigupConfig,
    /// Source file; `None` when no config file was found.
    pub source: Option<PathBuf>,
}

/// Load a single config file and parse it into RigupConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RigupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RigupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RigupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into RigupConfig.
///
/// A file holding only comments or whitespace is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RigupConfig> {
    if is_blank(content) {
        return Ok(RigupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| RigupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

/// Find, parse and validate the config for this run.
///
/// An `explicit` path must exist. Otherwise the default locations are
/// searched from `cwd`, and finding nothing yields the default config.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => ConfigPaths::discover(cwd).selected().cloned(),
    };

    let Some(path) = source else {
        tracing::debug!("No config file found");
        return Ok(LoadedConfig::default());
    };

    tracing::debug!("Loading config from {}", path.display());
    let config = load_config_file(&path)?;
    validate(&config)?;

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Profile;
    use tempfile::TempDir;

    #[test]
    fn explicit_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, RigupError::ConfigNotFound { .. }));
    }

    #[test]
    fn project_file_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("rigup.yml"), "profile: linux\n").unwrap();

        let loaded = load_config(None, temp.path()).unwrap();
        assert_eq!(loaded.config.profile, Some(Profile::Linux));
        assert_eq!(loaded.source, Some(temp.path().join("rigup.yml")));
    }

    #[test]
    fn explicit_path_wins_over_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("rigup.yml"), "profile: linux\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "profile: custom\n").unwrap();

        let loaded = load_config(Some(&other), temp.path()).unwrap();
        assert_eq!(loaded.config.profile, Some(Profile::Custom));
    }

    #[test]
    fn comment_only_file_is_empty_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rigup.yml");
        fs::write(&path, "# nothing yet\n\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config, RigupConfig::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rigup.yml");
        fs::write(&path, "tools: [unclosed").unwrap();

        let err = load_config_file(&path).unwrap_err();
        match err {
            RigupError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn invalid_tools_fail_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rigup.yml");
        fs::write(
            &path,
            "tools:\n  - { name: a, detect: { on_path: a }, install: { apt: a }, fallback: f }\n  - { name: A, detect: { on_path: a }, install: { apt: a }, fallback: f }\n",
        )
        .unwrap();

        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, RigupError::ConfigValidationError { .. }));
    }
}
