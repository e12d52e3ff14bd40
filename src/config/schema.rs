//! Configuration schema.
//!
//! Maps `rigup.yml`:
//!
//! ```yaml
//! profile: macos
//! output: quiet
//! disable: [jq]
//! tools:
//!   - name: ripgrep
//!     detect: { on_path: rg }
//!     install: { brew: ripgrep }
//!     fallback: "See https://github.com/BurntSushi/ripgrep#installation"
//! ```

use serde::Deserialize;

use crate::catalog::{Profile, ToolDef};
use crate::ui::OutputMode;

/// Root of `rigup.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RigupConfig {
    /// Profile to use instead of auto-detection (overridden by `--profile`)
    pub profile: Option<Profile>,

    /// Default output mode (overridden by `--verbose` / `--quiet`)
    pub output: Option<OutputMode>,

    /// Built-in tools to drop
    pub disable: Vec<String>,

    /// Extra tools, or replacements for built-ins of the same name
    pub tools: Vec<ToolDef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DetectDef, InstallDef};

    #[test]
    fn parses_full_config() {
        let yaml = r#"
profile: macos
output: quiet
disable: [jq, wget]
tools:
  - name: ripgrep
    detect: { on_path: rg }
    install: { brew: ripgrep }
    fallback: "See https://github.com/BurntSushi/ripgrep#installation"
"#;
        let config: RigupConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.profile, Some(Profile::Macos));
        assert_eq!(config.output, Some(OutputMode::Quiet));
        assert_eq!(config.disable, vec!["jq", "wget"]);
        assert_eq!(config.tools.len(), 1);
        assert_eq!(config.tools[0].detect, DetectDef::OnPath("rg".into()));
        assert_eq!(config.tools[0].install, InstallDef::Brew("ripgrep".into()));
    }

    #[test]
    fn every_field_is_optional() {
        let config: RigupConfig = serde_yaml::from_str("disable: []").unwrap();
        assert_eq!(config, RigupConfig::default());
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let result: Result<RigupConfig, _> = serde_yaml::from_str("steps: {}");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let result: Result<RigupConfig, _> = serde_yaml::from_str("profile: freebsd");
        assert!(result.is_err());
    }
}
