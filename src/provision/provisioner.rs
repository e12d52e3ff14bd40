//! The provisioning loop.

use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

use super::result::{ProvisionReport, ProvisionResult};
use super::spec::{InstallOptions, ToolSpec};

/// Prompt key for the up-front confirmation (`RIGUP_PROMPT_PROCEED`).
pub const CONFIRM_PROMPT_KEY: &str = "proceed";

/// Applies tool specs to the current machine, one at a time.
///
/// Preconditions (elevation, OS version, host environment) are the
/// caller's job and are not re-checked here.
pub struct Provisioner<'a> {
    ui: &'a mut dyn UserInterface,
    confirmed: bool,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner reporting through `ui`.
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self {
            ui,
            confirmed: false,
        }
    }

    /// Treat installs as already confirmed (e.g. `--yes`).
    pub fn with_confirmation(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Whether installs are currently confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Provision every spec in order.
    ///
    /// Without prior confirmation, the user is asked once before anything
    /// runs when `interactive` is set or the UI has a preset answer for
    /// [`CONFIRM_PROMPT_KEY`]; declining marks every spec cancelled.
    /// Install failures never stop the run.
    ///
    /// Returns an error only if the confirmation prompt itself fails.
    pub fn run(&mut self, specs: &[ToolSpec], interactive: bool) -> Result<ProvisionReport> {
        if specs.is_empty() {
            return Ok(ProvisionReport::new());
        }

        let ask = interactive || self.ui.has_preset_answer(CONFIRM_PROMPT_KEY);
        if ask && !self.confirmed {
            let prompt = Prompt::confirm(
                CONFIRM_PROMPT_KEY,
                &format!(
                    "Check {} and install any that are missing?",
                    describe_count(specs.len())
                ),
            )
            .with_default(false);

            if !self.ui.confirm(&prompt)? {
                tracing::info!("Provisioning declined by user");
                self.ui.warning("Installation cancelled. Nothing was installed.");
                return Ok(ProvisionReport::cancelled(
                    specs.iter().map(|s| s.name.as_str()),
                ));
            }
            self.confirmed = true;
        }

        let options = InstallOptions {
            stream_output: self.ui.output_mode().shows_command_output(),
        };

        let mut report = ProvisionReport::new();
        for (index, spec) in specs.iter().enumerate() {
            self.ui.show_progress(index + 1, specs.len());
            let result = self.provision(spec, &options);
            report.record(&spec.name, result);
        }

        Ok(report)
    }

    fn provision(&mut self, spec: &ToolSpec, options: &InstallOptions) -> ProvisionResult {
        let mut spinner = self.ui.start_spinner(&format!("Checking {}", spec.name));

        if spec.is_present() {
            spinner.finish_success(&format!("{} is already installed", spec.name));
            return ProvisionResult::AlreadyPresent;
        }
        spinner.finish_skipped(&format!("{} not found", spec.name));
        drop(spinner);

        self.ui.message(&format!(
            "Installing {} ({})",
            spec.name,
            spec.install.describe()
        ));

        match spec.install.install(options) {
            Ok(()) => {
                self.ui.success(&format!("{} installed", spec.name));
                ProvisionResult::Installed
            }
            Err(e) => {
                tracing::warn!("Install of {} failed: {}", spec.name, e);
                self.ui
                    .error(&format!("{} could not be installed: {}", spec.name, e));
                if let Some(output) = e.output() {
                    self.ui.message(output);
                }
                self.ui.show_hint(&spec.fallback);
                ProvisionResult::FailedWithFallback {
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn describe_count(n: usize) -> String {
    if n == 1 {
        "1 tool".to_string()
    } else {
        format!("{} tools", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::spec::{InstallError, Installer, Probe, ProbeError};
    use crate::ui::{MockUI, SpinnerStatus};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// A simulated machine: which tools are installed, and which installs were run.
    #[derive(Default, Clone)]
    struct FakeHost {
        installed: Rc<RefCell<Vec<String>>>,
        install_calls: Rc<RefCell<Vec<String>>>,
    }

    impl FakeHost {
        fn with_installed(names: &[&str]) -> Self {
            let host = Self::default();
            host.installed
                .borrow_mut()
                .extend(names.iter().map(|n| n.to_string()));
            host
        }

        fn calls(&self) -> Vec<String> {
            self.install_calls.borrow().clone()
        }

        fn spec(&self, name: &str, install_succeeds: bool) -> ToolSpec {
            ToolSpec::new(
                name,
                Box::new(FakeProbe {
                    host: self.clone(),
                    name: name.to_string(),
                }),
                Box::new(FakeInstaller {
                    host: self.clone(),
                    name: name.to_string(),
                    succeeds: install_succeeds,
                }),
                format!("Install {} manually", name),
            )
        }
    }

    struct FakeProbe {
        host: FakeHost,
        name: String,
    }

    impl Probe for FakeProbe {
        fn is_present(&self) -> std::result::Result<bool, ProbeError> {
            Ok(self.host.installed.borrow().contains(&self.name))
        }

        fn describe(&self) -> String {
            format!("{} installed", self.name)
        }
    }

    struct FakeInstaller {
        host: FakeHost,
        name: String,
        succeeds: bool,
    }

    impl Installer for FakeInstaller {
        fn install(&self, _options: &InstallOptions) -> std::result::Result<(), InstallError> {
            self.host.install_calls.borrow_mut().push(self.name.clone());
            if self.succeeds {
                self.host.installed.borrow_mut().push(self.name.clone());
                Ok(())
            } else {
                Err(InstallError::Failed {
                    command: format!("install {}", self.name),
                    code: Some(1),
                    output: String::new(),
                })
            }
        }

        fn describe(&self) -> String {
            format!("install {}", self.name)
        }
    }

    struct BrokenProbe {
        calls: Rc<Cell<usize>>,
    }

    impl Probe for BrokenProbe {
        fn is_present(&self) -> std::result::Result<bool, ProbeError> {
            self.calls.set(self.calls.get() + 1);
            Err(ProbeError::Spawn {
                command: "probe".into(),
            })
        }

        fn describe(&self) -> String {
            "broken".into()
        }
    }

    #[test]
    fn mixed_scenario_attempts_every_tool() {
        let host = FakeHost::with_installed(&["Python"]);
        let specs = vec![
            host.spec("Git", true),
            host.spec("Node", false),
            host.spec("Python", true),
        ];

        let mut ui = MockUI::new();
        let report = Provisioner::new(&mut ui).run(&specs, false).unwrap();

        assert_eq!(
            report.outcomes(),
            vec![
                &ProvisionResult::Installed,
                &ProvisionResult::FailedWithFallback {
                    reason: "'install Node' exited with code Some(1)".into()
                },
                &ProvisionResult::AlreadyPresent,
            ]
        );
        assert_eq!(host.calls(), vec!["Git", "Node"]);
        assert!(ui.has_hint("Install Node manually"));
        assert!(ui.has_error("Node could not be installed"));
        assert!(ui.has_success("Git installed"));
    }

    #[test]
    fn present_tools_are_never_installed() {
        let host = FakeHost::with_installed(&["Git", "Go"]);
        let specs = vec![host.spec("Git", true), host.spec("Go", false)];

        let mut ui = MockUI::new();
        let report = Provisioner::new(&mut ui).run(&specs, false).unwrap();

        assert!(host.calls().is_empty());
        assert!(report
            .outcomes()
            .iter()
            .all(|r| **r == ProvisionResult::AlreadyPresent));
    }

    #[test]
    fn second_run_finds_everything_present() {
        let host = FakeHost::default();
        let specs = vec![host.spec("Git", true), host.spec("Rust", true)];

        let mut ui = MockUI::new();
        let mut provisioner = Provisioner::new(&mut ui);
        let first = provisioner.run(&specs, false).unwrap();
        let second = provisioner.run(&specs, false).unwrap();

        assert_eq!(
            first.outcomes(),
            vec![&ProvisionResult::Installed, &ProvisionResult::Installed]
        );
        assert_eq!(
            second.outcomes(),
            vec![&ProvisionResult::AlreadyPresent, &ProvisionResult::AlreadyPresent]
        );
        assert_eq!(host.calls(), vec!["Git", "Rust"]);
    }

    #[test]
    fn failure_does_not_stop_later_installs() {
        let host = FakeHost::default();
        let specs = vec![
            host.spec("Java", false),
            host.spec(".NET", false),
            host.spec("Go", true),
        ];

        let mut ui = MockUI::new();
        let report = Provisioner::new(&mut ui).run(&specs, false).unwrap();

        assert_eq!(host.calls(), vec!["Java", ".NET", "Go"]);
        assert_eq!(report.failed(), vec!["Java", ".NET"]);
        assert_eq!(ui.hints().len(), 2);
    }

    #[test]
    fn declined_confirmation_cancels_everything() {
        let host = FakeHost::with_installed(&["Git"]);
        let specs = vec![host.spec("Git", true), host.spec("Node", true)];

        let mut ui = MockUI::new();
        ui.set_prompt_response(CONFIRM_PROMPT_KEY, "no");
        let report = Provisioner::new(&mut ui).run(&specs, true).unwrap();

        assert!(report.is_cancelled());
        assert_eq!(
            report.outcomes(),
            vec![&ProvisionResult::Cancelled, &ProvisionResult::Cancelled]
        );
        assert!(host.calls().is_empty());
        assert!(ui.spinners().is_empty());
        assert!(ui.has_warning("cancelled"));
    }

    #[test]
    fn accepted_confirmation_is_asked_once() {
        let host = FakeHost::default();
        let specs = vec![host.spec("Git", true)];

        let mut ui = MockUI::new();
        ui.set_prompt_response(CONFIRM_PROMPT_KEY, "yes");
        let mut provisioner = Provisioner::new(&mut ui);
        provisioner.run(&specs, true).unwrap();
        assert!(provisioner.is_confirmed());
        provisioner.run(&specs, true).unwrap();

        assert_eq!(ui.prompts_shown(), [CONFIRM_PROMPT_KEY.to_string()]);
        assert_eq!(host.calls(), vec!["Git"]);
    }

    #[test]
    fn prior_confirmation_skips_prompt() {
        let host = FakeHost::default();
        let specs = vec![host.spec("Git", true)];

        let mut ui = MockUI::new();
        let report = Provisioner::new(&mut ui)
            .with_confirmation(true)
            .run(&specs, true)
            .unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert_eq!(report.outcomes(), vec![&ProvisionResult::Installed]);
    }

    #[test]
    fn non_interactive_never_prompts() {
        let host = FakeHost::default();
        let specs = vec![host.spec("Git", true)];

        let mut ui = MockUI::new();
        Provisioner::new(&mut ui).run(&specs, false).unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert_eq!(host.calls(), vec!["Git"]);
    }

    #[test]
    fn non_interactive_preset_decline_cancels() {
        let host = FakeHost::default();
        let specs = vec![host.spec("Git", true), host.spec("Node", true)];

        let mut ui = MockUI::new();
        ui.set_prompt_response(CONFIRM_PROMPT_KEY, "no");
        let report = Provisioner::new(&mut ui).run(&specs, false).unwrap();

        assert!(report.is_cancelled());
        assert_eq!(ui.prompts_shown(), [CONFIRM_PROMPT_KEY.to_string()]);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn empty_spec_list_returns_empty_without_prompt() {
        let mut ui = MockUI::new();
        let report = Provisioner::new(&mut ui).run(&[], true).unwrap();

        assert!(report.is_empty());
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn detection_error_is_treated_as_absent() {
        let host = FakeHost::default();
        let calls = Rc::new(Cell::new(0));
        let spec = ToolSpec::new(
            "WSL",
            Box::new(BrokenProbe {
                calls: Rc::clone(&calls),
            }),
            Box::new(FakeInstaller {
                host: host.clone(),
                name: "WSL".into(),
                succeeds: true,
            }),
            "Run wsl --install",
        );

        let mut ui = MockUI::new();
        let report = Provisioner::new(&mut ui).run(&[spec], false).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(host.calls(), vec!["WSL"]);
        assert_eq!(report.outcomes(), vec![&ProvisionResult::Installed]);
    }

    #[test]
    fn reports_one_line_per_tool_per_phase() {
        let host = FakeHost::with_installed(&["Python"]);
        let specs = vec![host.spec("Git", true), host.spec("Python", true)];

        let mut ui = MockUI::new();
        Provisioner::new(&mut ui).run(&specs, false).unwrap();

        assert_eq!(ui.spinners(), ["Checking Git", "Checking Python"]);
        assert_eq!(
            ui.spinner_finishes(),
            vec![
                (SpinnerStatus::Skipped, "Git not found".to_string()),
                (SpinnerStatus::Success, "Python is already installed".to_string()),
            ]
        );
        assert_eq!(ui.messages(), ["Installing Git (install Git)"]);
        assert_eq!(ui.progress(), [(1, 2), (2, 2)]);
    }
}
