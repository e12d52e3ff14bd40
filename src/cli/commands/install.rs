//! Install command implementation.
//!
//! The `rigup install` command checks host preconditions, then provisions
//! every tool of the plan, installing only the missing ones.

use crate::catalog::BuildContext;
use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::preflight;
use crate::provision::Provisioner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    context: &'a CommandContext,
    args: InstallArgs,
    interactive: bool,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(context: &'a CommandContext, args: InstallArgs, interactive: bool) -> Self {
        Self {
            context,
            args,
            interactive,
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan = self.context.plan(&self.args.filter)?;
        for warning in plan.warnings() {
            ui.warning(warning);
        }

        let profile = plan.profile();
        let host = self.context.host();

        if self.args.skip_preflight {
            tracing::warn!("Preflight checks skipped");
        } else if let Err(e) = preflight::check(profile, host) {
            ui.error(&e.to_string());
            if let Some(remediation) = e.remediation() {
                ui.show_hint(remediation);
            }
            return Ok(CommandResult::failure(1));
        }

        if plan.tools().is_empty() {
            ui.message(&format!("No tools to provision for the {} profile.", profile));
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Provisioning ({} profile)", profile));

        let specs = plan.build(&BuildContext::for_elevation(host.elevated));
        let interactive = self.interactive && !self.args.non_interactive;
        let report = Provisioner::new(&mut *ui)
            .with_confirmation(self.args.yes)
            .run(&specs, interactive)?;

        if report.is_cancelled() {
            return Ok(CommandResult::success());
        }

        ui.message("");
        if report.failed().is_empty() {
            ui.success(&report.summary_line());
        } else {
            ui.warning(&report.summary_line());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DetectDef, InstallDef, Profile, ToolDef};
    use crate::cli::args::ToolFilter;
    use crate::config::RigupConfig;
    use crate::preflight::{HostInfo, HostOs};
    use crate::provision::CONFIRM_PROMPT_KEY;
    use crate::ui::MockUI;

    fn host(os: HostOs, elevated: bool) -> HostInfo {
        HostInfo {
            os,
            elevated,
            windows_build: Some(22631),
            in_wsl: false,
        }
    }

    fn tool(name: &str, detect: &str, install: &str) -> ToolDef {
        ToolDef::new(
            name,
            DetectDef::Command(detect.into()),
            InstallDef::Script(install.into()),
            format!("Install {} by hand", name),
        )
    }

    fn custom_context(tools: Vec<ToolDef>) -> CommandContext {
        let config = RigupConfig {
            tools,
            ..Default::default()
        };
        CommandContext::new(config, Some(Profile::Custom)).with_host(host(HostOs::Linux, false))
    }

    fn args() -> InstallArgs {
        InstallArgs {
            yes: true,
            ..Default::default()
        }
    }

    #[test]
    fn present_tools_are_reported() {
        let ctx = custom_context(vec![tool("shell", "exit 0", "exit 1")]);
        let mut ui = MockUI::new();

        let result = InstallCommand::new(&ctx, args(), false).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("1 tool: 1 already present, 0 installed, 0 failed"));
    }

    #[test]
    fn failed_install_still_exits_zero() {
        let ctx = custom_context(vec![tool("ghost", "exit 1", "exit 3")]);
        let mut ui = MockUI::new();

        let result = InstallCommand::new(&ctx, args(), false).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_hint("Install ghost by hand"));
        assert!(ui.has_warning("1 tool: 0 already present, 0 installed, 1 failed"));
    }

    #[test]
    fn precondition_failure_exits_one_with_remediation() {
        let ctx = CommandContext::new(RigupConfig::default(), Some(Profile::Windows))
            .with_host(host(HostOs::Windows, false));
        let mut ui = MockUI::new();

        let result = InstallCommand::new(&ctx, args(), false).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Preflight check 'elevated' failed"));
        assert!(ui.has_hint("Run as administrator"));
    }

    #[test]
    fn skip_preflight_bypasses_checks() {
        let config = RigupConfig {
            disable: ["WSL", "Git", "Node.js", "Python", "Go", "Rust", "Java", ".NET SDK"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        };
        let ctx = CommandContext::new(config, Some(Profile::Windows)).with_host(host(HostOs::Windows, false));
        let mut ui = MockUI::new();
        let args = InstallArgs {
            skip_preflight: true,
            ..args()
        };

        let result = InstallCommand::new(&ctx, args, false).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No tools to provision for the windows profile."));
    }

    #[test]
    fn declined_prompt_is_a_clean_exit() {
        let ctx = custom_context(vec![tool("ghost", "exit 1", "exit 0")]);
        let mut ui = MockUI::new();
        ui.set_prompt_response(CONFIRM_PROMPT_KEY, "no");
        let args = InstallArgs::default();

        let result = InstallCommand::new(&ctx, args, true).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Installation cancelled"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn non_interactive_flag_suppresses_prompt() {
        let ctx = custom_context(vec![tool("shell", "exit 0", "exit 1")]);
        let mut ui = MockUI::new();
        let args = InstallArgs {
            non_interactive: true,
            ..Default::default()
        };

        InstallCommand::new(&ctx, args, true).execute(&mut ui).unwrap();

        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn unknown_only_name_is_error() {
        let ctx = custom_context(vec![tool("shell", "exit 0", "exit 1")]);
        let mut ui = MockUI::new();
        let args = InstallArgs {
            filter: ToolFilter {
                only: vec!["nope".into()],
                skip: Vec::new(),
            },
            ..args()
        };

        assert!(InstallCommand::new(&ctx, args, false).execute(&mut ui).is_err());
    }
}
