//! Per-tool outcomes and the run report.

use std::fmt;

/// Terminal state of one tool in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionResult {
    /// The probe found the tool; nothing was installed.
    AlreadyPresent,
    /// The tool was absent and the install succeeded.
    Installed,
    /// The tool was absent, the install failed, and fallback guidance was shown.
    FailedWithFallback {
        /// Why the install failed.
        reason: String,
    },
    /// The user declined the confirmation prompt; nothing was attempted.
    Cancelled,
}

impl ProvisionResult {
    /// Short label used in summaries and `--json` output.
    pub fn label(&self) -> &'static str {
        match self {
            ProvisionResult::AlreadyPresent => "already present",
            ProvisionResult::Installed => "installed",
            ProvisionResult::FailedWithFallback { .. } => "failed",
            ProvisionResult::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ProvisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome recorded for a named tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    /// Tool name, as given in its spec.
    pub name: String,
    /// What happened.
    pub result: ProvisionResult,
}

/// Ordered outcomes of a provisioning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    results: Vec<ToolOutcome>,
}

impl ProvisionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// A report marking every named tool as cancelled.
    pub fn cancelled<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            results: names
                .into_iter()
                .map(|name| ToolOutcome {
                    name: name.to_string(),
                    result: ProvisionResult::Cancelled,
                })
                .collect(),
        }
    }

    /// Record the outcome for the next tool.
    pub fn record(&mut self, name: &str, result: ProvisionResult) {
        self.results.push(ToolOutcome {
            name: name.to_string(),
            result,
        });
    }

    /// Outcomes in run order.
    pub fn results(&self) -> &[ToolOutcome] {
        &self.results
    }

    /// Just the results, in run order.
    pub fn outcomes(&self) -> Vec<&ProvisionResult> {
        self.results.iter().map(|r| &r.result).collect()
    }

    /// Number of tools in the run.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the run had no tools.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether the run was cancelled at the confirmation prompt.
    pub fn is_cancelled(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|r| r.result == ProvisionResult::Cancelled)
    }

    /// Names of tools whose install failed.
    pub fn failed(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| matches!(r.result, ProvisionResult::FailedWithFallback { .. }))
            .map(|r| r.name.as_str())
            .collect()
    }

    fn count(&self, pred: impl Fn(&ProvisionResult) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.result)).count()
    }

    /// One-line summary, e.g. `3 tools: 1 already present, 1 installed, 1 failed`.
    pub fn summary_line(&self) -> String {
        let total = self.len();
        let noun = if total == 1 { "tool" } else { "tools" };

        if self.is_cancelled() {
            return format!("{} {}: cancelled, nothing installed", total, noun);
        }

        let present = self.count(|r| *r == ProvisionResult::AlreadyPresent);
        let installed = self.count(|r| *r == ProvisionResult::Installed);
        let failed = self.failed().len();

        format!(
            "{} {}: {} already present, {} installed, {} failed",
            total, noun, present, installed, failed
        )
    }
}
