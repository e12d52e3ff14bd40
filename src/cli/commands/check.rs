//! Check command implementation.
//!
//! The `rigup check` command runs every probe and reports presence. It
//! never installs anything and never prompts.

use serde::Serialize;

use crate::catalog::BuildContext;
use crate::cli::args::CheckArgs;
use crate::error::{Result, RigupError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Presence of one tool, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckEntry {
    pub name: String,
    pub present: bool,
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    context: &'a CommandContext,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(context: &'a CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan = self.context.plan(&self.args.filter)?;
        let specs = plan.build(&BuildContext::default());

        if self.args.json {
            let entries: Vec<CheckEntry> = specs
                .iter()
                .map(|spec| CheckEntry {
                    name: spec.name.clone(),
                    present: spec.is_present(),
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&entries).map_err(|e| RigupError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        for warning in plan.warnings() {
            ui.warning(warning);
        }

        if specs.is_empty() {
            ui.message(&format!("No tools for the {} profile.", plan.profile()));
            return Ok(CommandResult::success());
        }

        let mut missing = 0;
        for spec in &specs {
            let mut spinner = ui.start_spinner(&format!("Checking {}", spec.name));
            if spec.is_present() {
                spinner.finish_success(&format!("{} is installed", spec.name));
            } else {
                missing += 1;
                spinner.finish_skipped(&format!("{} is missing", spec.name));
            }
        }

        ui.message("");
        if missing == 0 {
            ui.success(&format!("All {} tools are installed", specs.len()));
        } else {
            ui.show_hint(&format!(
                "{} of {} tools missing. Run `rigup install` to install them.",
                missing,
                specs.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
