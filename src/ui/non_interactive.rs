//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, RigupError};

use super::{parse_answer, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `RIGUP_PROMPT_<KEY>` environment variables,
/// then from the prompt's default. Output is plain lines with no
/// spinners or colors.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("RIGUP_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            for line in hint.lines() {
                println!("  → {}", line);
            }
        }
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = env_key(&prompt.key);
        if let Some(value) = self.env_overrides.get(&env_key) {
            return parse_answer(value).ok_or_else(|| RigupError::PromptUnavailable {
                key: prompt.key.clone(),
                message: format!("{} must be yes or no, got '{}'", env_key, value),
            });
        }

        if let Some(default) = prompt.default {
            return Ok(default);
        }

        Err(RigupError::PromptUnavailable {
            key: prompt.key.clone(),
            message: "no default in non-interactive mode".to_string(),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!("[{}/{}]", current, total);
        }
    }

    fn has_preset_answer(&self, key: &str) -> bool {
        self.env_overrides.contains_key(&env_key(key))
    }
}

fn env_key(key: &str) -> String {
    format!("RIGUP_PROMPT_{}", key.to_uppercase())
}

/// Spinner stand-in that prints the final state as a plain line.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("○ {}", msg);
        }
    }
}
