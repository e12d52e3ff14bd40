//! Configuration validation rules.
//!
//! - Tool names must be non-empty and unique (case-insensitive)
//! - Install targets and probe arguments must be non-empty
//!
//! Unknown `disable` entries are not errors; they surface as warnings when
//! the plan is assembled.

use std::collections::HashSet;

use crate::catalog::DetectDef;
use crate::config::schema::RigupConfig;
use crate::error::{Result, RigupError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Tool name if the error is tool-specific
    pub tool: Option<String>,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &RigupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, tool) in config.tools.iter().enumerate() {
        let name = tool.name.trim();
        if name.is_empty() {
            errors.push(ValidationError {
                rule: "empty-name".to_string(),
                message: format!("Tool #{} has an empty name", index + 1),
                tool: None,
            });
            continue;
        }

        if !seen.insert(name.to_lowercase()) {
            errors.push(ValidationError {
                rule: "duplicate-name".to_string(),
                message: format!("Tool '{}' is defined more than once", name),
                tool: Some(name.to_string()),
            });
        }

        if tool.install.target().trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-install".to_string(),
                message: format!("Tool '{}' has an empty install target", name),
                tool: Some(name.to_string()),
            });
        }

        if has_empty_probe(&tool.detect) {
            errors.push(ValidationError {
                rule: "empty-detect".to_string(),
                message: format!("Tool '{}' has an empty detect value", name),
                tool: Some(name.to_string()),
            });
        }
    }

    errors
}

fn has_empty_probe(detect: &DetectDef) -> bool {
    match detect {
        DetectDef::OnPath(v) | DetectDef::Command(v) | DetectDef::File(v) => v.trim().is_empty(),
        DetectDef::Any(inner) => inner.iter().any(has_empty_probe),
    }
}

/// Validate and return the first error as a [`RigupError`].
pub fn validate(config: &RigupConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(RigupError::ConfigValidationError { message })
}
