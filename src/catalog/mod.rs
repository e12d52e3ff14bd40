//! Tool catalog.
//!
//! - [`profile`] - Host profiles and auto-resolution
//! - [`def`] - Data form of a tool ([`ToolDef`]), shared with the config file
//! - [`builtin`] - Built-in tool lists per profile
//! - [`plan`] - Merging config tools and applying `--only` / `--skip`

pub mod builtin;
pub mod def;
pub mod plan;
pub mod profile;

pub use builtin::builtin_tools;
pub use def::{BuildContext, DetectDef, InstallDef, ToolDef};
pub use plan::ToolPlan;
pub use profile::Profile;
