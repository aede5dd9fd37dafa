//! Configuration file discovery and loading.
//!
//! Configuration is optional. When no file exists the stock
//! [`LaunchConfig::default`] is used.

use crate::config::merger::merge_configs;
use crate::config::schema::LaunchConfig;
use crate::error::{LaunchError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".launchpad";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.launchpad/config.yml`)
/// 2. Local overrides (`.launchpad/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Project config: .launchpad/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .launchpad/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML content into a LaunchConfig.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LaunchConfig> {
    let value: Value = serde_yaml::from_str(content).map_err(|e| LaunchError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })?;
    from_value(value, source_path)
}

/// Load a config file as a raw YAML value (for merging).
///
/// An empty file loads as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LaunchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LaunchError::Io(e)
        }
    })?;

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| LaunchError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(if value.is_null() {
        Value::Mapping(Default::default())
    } else {
        value
    })
}

/// Load configuration for a project.
///
/// With `explicit` set, only that file is read and it must exist.
/// Otherwise the project config and local overrides are discovered and
/// merged; if neither exists the defaults are returned.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LaunchConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Loading explicit config {}", path.display());
        let value = load_config_value(path)?;
        return from_value(value, path);
    }

    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();
    if existing.is_empty() {
        tracing::debug!("No config found under {}, using defaults", project_root.display());
        return Ok(LaunchConfig::default());
    }

    let mut layers = Vec::with_capacity(existing.len());
    for path in &existing {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let source = existing[existing.len() - 1].as_path();
    from_value(merge_configs(&layers), source)
}

fn from_value(value: Value, source_path: &Path) -> Result<LaunchConfig> {
    let value = if value.is_null() {
        Value::Mapping(Default::default())
    } else {
        value
    };
    serde_yaml::from_value(value).map_err(|e| LaunchError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
