//! Declarative tool definitions.
//!
//! A [`ToolDef`] is plain data, shared by the built-in catalog and the
//! `tools:` list of the config file. [`ToolDef::build`] turns it into a
//! runnable [`ToolSpec`].
//!
//! In YAML, `detect` and `install` are maps with exactly one key:
//!
//! ```yaml
//! detect: { on_path: rg }
//! install: { brew: ripgrep }
//! ```

use serde::Deserialize;
use std::fmt;

use crate::provision::installer::{AptIndex, PackageInstall, PackageManager, ShellInstall};
use crate::provision::probe::{AnyOf, CommandSucceeds, FileExists, OnPath};
use crate::provision::{Installer, Probe, ToolSpec};

/// How to tell whether a tool is present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDetect")]
pub enum DetectDef {
    /// Binary on PATH.
    OnPath(String),
    /// Shell command exits 0.
    Command(String),
    /// File or directory exists (`~/` expanded).
    File(String),
    /// Any of the nested probes.
    Any(Vec<DetectDef>),
}

impl DetectDef {
    fn build(&self) -> Box<dyn Probe> {
        match self {
            DetectDef::OnPath(binary) => Box::new(OnPath::new(binary)),
            DetectDef::Command(command) => Box::new(CommandSucceeds::new(command)),
            DetectDef::File(path) => Box::new(FileExists::new(path)),
            DetectDef::Any(defs) => Box::new(AnyOf::new(defs.iter().map(|d| d.build()).collect())),
        }
    }
}

impl fmt::Display for DetectDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectDef::OnPath(binary) => write!(f, "on_path: {}", binary),
            DetectDef::Command(command) => write!(f, "command: {}", command),
            DetectDef::File(path) => write!(f, "file: {}", path),
            DetectDef::Any(defs) => {
                let parts: Vec<String> = defs.iter().map(|d| d.to_string()).collect();
                write!(f, "any of [{}]", parts.join(", "))
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDetect {
    on_path: Option<String>,
    command: Option<String>,
    file: Option<String>,
    any: Option<Vec<DetectDef>>,
}

impl TryFrom<RawDetect> for DetectDef {
    type Error = String;

    fn try_from(raw: RawDetect) -> Result<Self, Self::Error> {
        let mut found = Vec::new();
        if let Some(v) = raw.on_path {
            found.push(DetectDef::OnPath(v));
        }
        if let Some(v) = raw.command {
            found.push(DetectDef::Command(v));
        }
        if let Some(v) = raw.file {
            found.push(DetectDef::File(v));
        }
        if let Some(v) = raw.any {
            if v.is_empty() {
                return Err("detect.any must list at least one probe".to_string());
            }
            found.push(DetectDef::Any(v));
        }
        exactly_one(found, "detect", "on_path, command, file, any")
    }
}

/// How to install a tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawInstall")]
pub enum InstallDef {
    /// `winget install --id <id>`.
    Winget(String),
    /// `apt-get install -y <package>`.
    Apt(String),
    /// `brew install <formula>`.
    Brew(String),
    /// Arbitrary shell command.
    Script(String),
}

impl InstallDef {
    /// The package, formula or command this definition installs.
    pub fn target(&self) -> &str {
        match self {
            InstallDef::Winget(t) | InstallDef::Apt(t) | InstallDef::Brew(t) | InstallDef::Script(t) => t,
        }
    }

    fn build(&self, ctx: &BuildContext) -> Box<dyn Installer> {
        match self {
            InstallDef::Winget(id) => Box::new(PackageInstall::new(PackageManager::Winget, id)),
            InstallDef::Apt(package) => Box::new(
                PackageInstall::new(PackageManager::Apt, package)
                    .with_sudo(ctx.use_sudo)
                    .with_apt_index(ctx.apt_index.clone()),
            ),
            InstallDef::Brew(formula) => Box::new(PackageInstall::new(PackageManager::Brew, formula)),
            InstallDef::Script(command) => Box::new(ShellInstall::new(command)),
        }
    }
}

impl fmt::Display for InstallDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallDef::Winget(id) => write!(f, "winget: {}", id),
            InstallDef::Apt(package) => write!(f, "apt: {}", package),
            InstallDef::Brew(formula) => write!(f, "brew: {}", formula),
            InstallDef::Script(command) => write!(f, "script: {}", command),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInstall {
    winget: Option<String>,
    apt: Option<String>,
    brew: Option<String>,
    script: Option<String>,
}

impl TryFrom<RawInstall> for InstallDef {
    type Error = String;

    fn try_from(raw: RawInstall) -> Result<Self, Self::Error> {
        let mut found = Vec::new();
        if let Some(v) = raw.winget {
            found.push(InstallDef::Winget(v));
        }
        if let Some(v) = raw.apt {
            found.push(InstallDef::Apt(v));
        }
        if let Some(v) = raw.brew {
            found.push(InstallDef::Brew(v));
        }
        if let Some(v) = raw.script {
            found.push(InstallDef::Script(v));
        }
        exactly_one(found, "install", "winget, apt, brew, script")
    }
}

fn exactly_one<T>(mut found: Vec<T>, field: &str, keys: &str) -> Result<T, String> {
    match found.len() {
        1 => Ok(found.remove(0)),
        0 => Err(format!("{} needs one of: {}", field, keys)),
        _ => Err(format!("{} takes exactly one of: {}", field, keys)),
    }
}

/// One tool, as data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolDef {
    /// Display name; unique within a plan (case-insensitive).
    pub name: String,
    /// Presence probe.
    pub detect: DetectDef,
    /// Install action.
    pub install: InstallDef,
    /// Guidance shown when the install fails.
    pub fallback: String,
}

impl ToolDef {
    /// Create a definition.
    pub fn new(
        name: impl Into<String>,
        detect: DetectDef,
        install: InstallDef,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            detect,
            install,
            fallback: fallback.into(),
        }
    }

    /// Whether this definition is called `name` (case-insensitive).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Build the runnable spec.
    pub fn build(&self, ctx: &BuildContext) -> ToolSpec {
        ToolSpec::new(
            self.name.clone(),
            self.detect.build(),
            self.install.build(ctx),
            self.fallback.clone(),
        )
    }
}

/// Run-wide settings shared by every installer built for one run.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    /// Prefix apt-get with `sudo`.
    pub use_sudo: bool,
    /// Shared `apt-get update` tracker.
    pub apt_index: AptIndex,
}

impl BuildContext {
    /// Context for a process that is (or is not) already root.
    pub fn for_elevation(elevated: bool) -> Self {
        Self {
            use_sudo: !elevated,
            apt_index: AptIndex::default(),
        }
    }
}
