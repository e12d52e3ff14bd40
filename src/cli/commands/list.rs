//! List command implementation.
//!
//! The `rigup list` command shows the resolved tools of the selected
//! profile without probing or installing anything.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    context: &'a CommandContext,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(context: &'a CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan = self.context.plan(&self.args.filter)?;
        for warning in plan.warnings() {
            ui.warning(warning);
        }

        ui.show_header(&format!("Tools ({} profile)", plan.profile()));

        if plan.tools().is_empty() {
            ui.message("  (none)");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Tool", "Detect", "Install"]);
        for tool in plan.tools() {
            table.add_row(vec![
                tool.name.clone(),
                tool.detect.to_string(),
                tool.install.to_string(),
            ]);
        }
        ui.message(&table.render());

        Ok(CommandResult::success())
    }
}
