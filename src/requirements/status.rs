//! Preflight report types.

use serde::Serialize;

/// Outcome of the read-only preflight checks.
///
/// `missing_packages` is `None` when the package check never ran, which
/// happens whenever data files are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreflightReport {
    /// Data files that were not found.
    pub missing_files: Vec<String>,

    /// Packages that failed to import, if the package check ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_packages: Option<Vec<String>>,

    /// Interpreter used for the package check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
}

impl PreflightReport {
    /// Whether all data files were found.
    pub fn files_ok(&self) -> bool {
        self.missing_files.is_empty()
    }

    /// Whether the package check ran and found nothing missing.
    pub fn packages_ok(&self) -> bool {
        matches!(&self.missing_packages, Some(missing) if missing.is_empty())
    }

    /// Whether everything needed to launch is in place.
    pub fn is_ready(&self) -> bool {
        self.files_ok() && self.packages_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_when_nothing_missing() {
        let report = PreflightReport {
            missing_files: vec![],
            missing_packages: Some(vec![]),
            python: Some("python3".to_string()),
        };
        assert!(report.is_ready());
    }

    #[test]
    fn not_ready_when_package_check_skipped() {
        let report = PreflightReport {
            missing_files: vec!["Database.csv".to_string()],
            missing_packages: None,
            python: None,
        };
        assert!(!report.files_ok());
        assert!(!report.packages_ok());
        assert!(!report.is_ready());
    }

    #[test]
    fn not_ready_when_packages_missing() {
        let report = PreflightReport {
            missing_files: vec![],
            missing_packages: Some(vec!["xgboost".to_string()]),
            python: None,
        };
        assert!(report.files_ok());
        assert!(!report.is_ready());
    }

    #[test]
    fn serializes_without_skipped_package_check() {
        let report = PreflightReport {
            missing_files: vec!["C.csv".to_string()],
            missing_packages: None,
            python: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["missing_files"][0], "C.csv");
        assert!(json.get("missing_packages").is_none());
    }
}
