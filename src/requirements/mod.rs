//! Prerequisite checks and dependency installation.
//!
//! # Modules
//!
//! - [`files`] - Data file existence checks
//! - [`interpreter`] - Python interpreter resolution
//! - [`packages`] - Import probes for required packages
//! - [`installer`] - Manifest-based package installation
//! - [`status`] - Preflight report types

pub mod files;
pub mod installer;
pub mod interpreter;
pub mod packages;
pub mod status;

pub use files::missing_data_files;
pub use installer::{install_command, install_from_manifest};
pub use interpreter::{resolve_interpreter, resolve_interpreter_with, PYTHON_ENV_VAR};
pub use packages::PackageProbe;
pub use status::PreflightReport;
