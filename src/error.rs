//! Error types for launchpad operations.
//!
//! This module defines [`LaunchError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LaunchError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LaunchError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launchpad operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// One or more required data files are absent.
    #[error("Missing required data files: {}", .files.join(", "))]
    MissingDataFiles { files: Vec<String> },

    /// No usable Python interpreter could be located.
    #[error("Python interpreter not found (tried: {tried})")]
    InterpreterNotFound { tried: String },

    /// The package manager exited unsuccessfully or could not be started.
    #[error("{command} {}", describe_exit(.code))]
    InstallFailed { command: String, code: Option<i32> },

    /// The dashboard process could not be spawned or awaited.
    #[error("Failed to run '{command}': {message}")]
    LaunchFailed { command: String, message: String },

    /// A child process could not be started or awaited.
    #[error("Failed to start '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("returned non-zero exit status {}", code),
        None => "was terminated before it could finish".to_string(),
    }
}

/// Result type alias for launchpad operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
