//! The resolved tool list for one run.

use crate::error::{Result, RigupError};
use crate::provision::ToolSpec;

use super::builtin::builtin_tools;
use super::def::{BuildContext, ToolDef};
use super::profile::Profile;

/// Ordered tool definitions after merging config and applying filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPlan {
    profile: Profile,
    tools: Vec<ToolDef>,
    warnings: Vec<String>,
}

impl ToolPlan {
    /// Start from the built-ins of `profile`, drop `disable`d tools, then
    /// merge `extra`.
    ///
    /// An extra tool replaces the built-in of the same name in place;
    /// otherwise it is appended. Disabling a name that is not built in is
    /// recorded as a warning.
    pub fn assemble(profile: Profile, disable: &[String], extra: &[ToolDef]) -> Self {
        let mut tools = builtin_tools(profile);
        let mut warnings = Vec::new();

        for name in disable {
            let before = tools.len();
            tools.retain(|t| !t.is_named(name));
            if tools.len() == before {
                warnings.push(format!(
                    "'{}' is not a built-in tool of the {} profile; nothing to disable",
                    name, profile
                ));
            } else {
                tracing::debug!("Disabled built-in tool {}", name);
            }
        }

        for def in extra {
            match tools.iter_mut().find(|t| t.is_named(&def.name)) {
                Some(existing) => {
                    tracing::debug!("Config overrides built-in tool {}", def.name);
                    *existing = def.clone();
                }
                None => tools.push(def.clone()),
            }
        }

        Self {
            profile,
            tools,
            warnings,
        }
    }

    /// Keep only the `only` tools (when non-empty), then drop the `skip` tools.
    ///
    /// Every name must match a tool in the plan.
    pub fn filter(mut self, only: &[String], skip: &[String]) -> Result<Self> {
        let unknown: Vec<&str> = only
            .iter()
            .chain(skip)
            .filter(|name| !self.tools.iter().any(|t| t.is_named(name)))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            return Err(RigupError::ConfigValidationError {
                message: format!(
                    "unknown tool(s): {} (available: {})",
                    unknown.join(", "),
                    self.names().join(", ")
                ),
            });
        }

        if !only.is_empty() {
            self.tools.retain(|t| only.iter().any(|name| t.is_named(name)));
        }
        self.tools.retain(|t| !skip.iter().any(|name| t.is_named(name)));
        Ok(self)
    }

    /// The profile the plan was built for.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Tool definitions in run order.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Tool names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Non-fatal problems found while assembling.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Build runnable specs sharing one context.
    pub fn build(&self, ctx: &BuildContext) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.build(ctx)).collect()
    }
}
