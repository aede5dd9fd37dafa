//! Configuration validation rules.
//!
//! - Data file and package names must be non-empty
//! - Package names must be unique
//! - The manifest and dashboard script must be set

use crate::config::schema::LaunchConfig;
use crate::error::{LaunchError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &LaunchConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (idx, file) in config.data_files.iter().enumerate() {
        if file.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-data-file",
                format!("data_files[{}] is empty", idx),
            ));
        }
    }

    let mut seen = HashSet::new();
    for (idx, package) in config.packages.iter().enumerate() {
        let name = package.name().trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                "empty-package",
                format!("packages[{}] has an empty name", idx),
            ));
        } else if !seen.insert(name.to_lowercase()) {
            errors.push(ValidationError::new(
                "duplicate-package",
                format!("Package '{}' is listed more than once", name),
            ));
        }
    }

    if config.manifest.trim().is_empty() {
        errors.push(ValidationError::new("empty-manifest", "manifest is empty"));
    }

    if config.app.script.trim().is_empty() {
        errors.push(ValidationError::new("empty-script", "app.script is empty"));
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &LaunchConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(LaunchError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PackageSpec;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&LaunchConfig::default()).is_ok());
    }

    #[test]
    fn empty_data_file_is_rejected() {
        let config = LaunchConfig {
            data_files: vec!["Database.csv".into(), " ".into()],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "empty-data-file");
    }

    #[test]
    fn duplicate_package_is_rejected() {
        let config = LaunchConfig {
            packages: vec![PackageSpec::named("pandas"), PackageSpec::named("Pandas")],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "duplicate-package");
    }

    #[test]
    fn empty_manifest_and_script_are_both_reported() {
        let mut config = LaunchConfig {
            manifest: String::new(),
            ..Default::default()
        };
        config.app.script = String::new();

        let errors = validate_config(&config);

        let rules: Vec<_> = errors.iter().map(|e| e.rule.as_str()).collect();
        assert_eq!(rules, vec!["empty-manifest", "empty-script"]);
    }

    #[test]
    fn validate_joins_messages() {
        let config = LaunchConfig {
            manifest: String::new(),
            packages: vec![PackageSpec::named("")],
            ..Default::default()
        };

        let err = validate(&config).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("packages[0]"));
        assert!(msg.contains("manifest is empty"));
    }

    #[test]
    fn empty_lists_are_allowed() {
        let config = LaunchConfig {
            data_files: vec![],
            packages: vec![],
            ..Default::default()
        };
        assert!(validate(&config).is_ok());
    }
}
