//! Configuration schema definitions for launchpad.
//!
//! This module contains the struct definitions that map to the optional
//! `.launchpad/config.yml` file. Every field has a default, so an absent
//! or empty file yields the stock dashboard setup.

use serde::{Deserialize, Serialize};

/// Port Streamlit listens on when none is configured.
pub const DEFAULT_PORT: u16 = 8501;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Application name shown in the banner
    pub app_name: String,

    /// Global settings
    pub settings: Settings,

    /// Data files that must exist relative to the project root
    pub data_files: Vec<String>,

    /// Python packages that must be importable
    pub packages: Vec<PackageSpec>,

    /// Requirements manifest handed to the package manager
    pub manifest: String,

    /// Dashboard application
    pub app: AppConfig,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            app_name: "Renewable Energy Prediction App".to_string(),
            settings: Settings::default(),
            data_files: vec![
                "Database.csv".to_string(),
                "train_multi_output.csv".to_string(),
                "test_multi_output.csv".to_string(),
            ],
            packages: [
                "streamlit",
                "pandas",
                "numpy",
                "matplotlib",
                "seaborn",
                "plotly",
                "scikit-learn",
                "tensorflow",
                "xgboost",
            ]
            .into_iter()
            .map(PackageSpec::named)
            .collect(),
            manifest: "requirements.txt".to_string(),
            app: AppConfig::default(),
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,

    /// Interpreter to use instead of searching PATH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Exit non-zero when the run reports a failure
    #[serde(skip_serializing_if = "is_false")]
    pub propagate_exit_code: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Output mode as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

/// A required Python package.
///
/// Accepts either a bare distribution name or a mapping with an explicit
/// import name:
///
/// ```yaml
/// packages:
///   - pandas
///   - name: scikit-learn
///     import: sklearn
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageSpec {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, rename = "import", skip_serializing_if = "Option::is_none")]
        import_name: Option<String>,
    },
}

/// Distribution names whose importable module is spelled differently.
const IMPORT_ALIASES: &[(&str, &str)] = &[
    ("scikit-learn", "sklearn"),
    ("pillow", "PIL"),
    ("beautifulsoup4", "bs4"),
    ("opencv-python", "cv2"),
    ("pyyaml", "yaml"),
];

impl PackageSpec {
    /// Package identified only by its distribution name.
    pub fn named(name: &str) -> Self {
        Self::Name(name.to_string())
    }

    /// Distribution name, as reported to the user and installed from the manifest.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }

    /// Module name handed to `import`.
    pub fn import_name(&self) -> String {
        if let Self::Detailed {
            import_name: Some(import),
            ..
        } = self
        {
            return import.clone();
        }

        let name = self.name();
        IMPORT_ALIASES
            .iter()
            .find(|(dist, _)| dist.eq_ignore_ascii_case(name))
            .map(|(_, module)| module.to_string())
            .unwrap_or_else(|| name.replace('-', "_"))
    }
}

/// Dashboard application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Streamlit script to run
    pub script: String,

    /// Server port; passed to Streamlit only when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Extra arguments appended after the script
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            script: "streamlit_app_complete.py".to_string(),
            port: None,
            args: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Port the dashboard will be reachable on.
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Local URL of the running dashboard.
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.effective_port())
    }
}
