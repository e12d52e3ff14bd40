//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use rigup::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("rigup.yml"), "disable: [jq]").unwrap();
//!
//! let loaded = load_config(None, temp.path()).unwrap();
//! assert_eq!(loaded.config.disable, vec!["jq".to_string()]);
//! ```
//!
//! # Configuration File Locations
//!
//! The first existing file wins:
//! 1. `--config <path>` (must exist)
//! 2. Project config (`./rigup.yml`)
//! 3. User global config (`~/.rigup/config.yml`)

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, LoadedConfig};
pub use schema::RigupConfig;
pub use validator::{validate, validate_config, ValidationError};
