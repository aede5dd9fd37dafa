//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use launchpad::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".launchpad");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "app_name: Solar Forecast").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.app_name, "Solar Forecast");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.launchpad/config.yml`)
//! 2. Local overrides (`.launchpad/config.local.yml`)
//!
//! Both are optional; `--config <FILE>` bypasses discovery.

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{AppConfig, LaunchConfig, OutputMode, PackageSpec, Settings, DEFAULT_PORT};

pub use loader::{load_config, load_config_value, parse_config, ConfigPaths, CONFIG_DIR};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
