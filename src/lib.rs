//! Launchpad - preflight checks and launcher for the renewable energy
//! prediction dashboard.
//!
//! Launchpad verifies that the dashboard's data files exist, probes the
//! Python packages it imports, installs anything missing from
//! `requirements.txt` in a single pip call, and then runs the Streamlit app
//! in the foreground until it exits or the user presses Ctrl+C.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Data file checks, package probes, and installation
//! - [`runner`] - The setup-and-launch sequence
//! - [`shell`] - Child process execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use launchpad::config::LaunchConfig;
//! use launchpad::runner::LaunchPipeline;
//! use launchpad::shell::MockRunner;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = LaunchConfig::default();
//! let runner = MockRunner::new();
//!
//! let report = LaunchPipeline::new(&config, temp.path(), &runner)
//!     .with_python("python3")
//!     .preflight()
//!     .unwrap();
//!
//! assert_eq!(report.missing_files.len(), 3);
//! assert!(report.missing_packages.is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{LaunchError, Result};
