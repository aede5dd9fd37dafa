//! Python interpreter resolution.
//!
//! The interpreter is chosen from, in order:
//! 1. the `LAUNCHPAD_PYTHON` environment variable,
//! 2. `settings.python` in the config,
//! 3. the first executable `python3` or `python` on `PATH`.

use std::path::{Path, PathBuf};

use crate::error::{LaunchError, Result};
use crate::shell::{is_executable, parse_system_path, resolve_tool_path};

/// Environment variable overriding the interpreter.
pub const PYTHON_ENV_VAR: &str = "LAUNCHPAD_PYTHON";

/// Interpreter names searched on PATH when nothing is configured.
const PATH_CANDIDATES: &[&str] = &["python3", "python"];

/// Resolve the interpreter to use for probes, installs and launching.
pub fn resolve_interpreter(configured: Option<&str>) -> Result<PathBuf> {
    resolve_interpreter_with(configured, &|key| std::env::var(key), &parse_system_path())
}

/// Resolve with an injected env lookup and PATH, for testing.
pub fn resolve_interpreter_with<F>(
    configured: Option<&str>,
    env_fn: &F,
    path_entries: &[PathBuf],
) -> Result<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let explicit = env_fn(PYTHON_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string));

    if let Some(choice) = explicit {
        tracing::debug!("Using configured interpreter '{}'", choice);
        return resolve_named(&choice, path_entries).ok_or(LaunchError::InterpreterNotFound {
            tried: choice,
        });
    }

    for candidate in PATH_CANDIDATES {
        if let Some(path) = resolve_tool_path(candidate, path_entries) {
            tracing::debug!("Found interpreter at {}", path.display());
            return Ok(path);
        }
    }

    Err(LaunchError::InterpreterNotFound {
        tried: PATH_CANDIDATES.join(", "),
    })
}

/// A value containing a path separator is taken as a path; otherwise it
/// is looked up on PATH.
fn resolve_named(choice: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let as_path = Path::new(choice);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return (as_path.is_file() && is_executable(as_path)).then(|| as_path.to_path_buf());
    }
    resolve_tool_path(choice, path_entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn no_env(_: &str) -> std::result::Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    #[test]
    fn prefers_python3_on_path() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python"));
        create_fake_binary(&bin.join("python3"));

        let found = resolve_interpreter_with(None, &no_env, &[bin.clone()]).unwrap();

        assert_eq!(found, bin.join("python3"));
    }

    #[test]
    fn falls_back_to_python() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python"));

        let found = resolve_interpreter_with(None, &no_env, &[bin.clone()]).unwrap();

        assert_eq!(found, bin.join("python"));
    }

    #[test]
    fn env_var_wins_over_config() {
        let temp = TempDir::new().unwrap();
        let env_python = temp.path().join("venv/bin/python");
        create_fake_binary(&env_python);
        let env_value = env_python.to_string_lossy().to_string();

        let found = resolve_interpreter_with(
            Some("python3.11"),
            &|key| {
                if key == PYTHON_ENV_VAR {
                    Ok(env_value.clone())
                } else {
                    Err(std::env::VarError::NotPresent)
                }
            },
            &[],
        )
        .unwrap();

        assert_eq!(found, env_python);
    }

    #[test]
    fn configured_name_is_looked_up_on_path() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python3.11"));
        create_fake_binary(&bin.join("python3"));

        let found = resolve_interpreter_with(Some("python3.11"), &no_env, &[bin.clone()]).unwrap();

        assert_eq!(found, bin.join("python3.11"));
    }

    #[test]
    fn configured_but_missing_is_an_error() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python3"));

        let err = resolve_interpreter_with(Some("python2"), &no_env, &[bin]).unwrap_err();

        match err {
            LaunchError::InterpreterNotFound { tried } => assert_eq!(tried, "python2"),
            other => panic!("Expected InterpreterNotFound, got {:?}", other),
        }
    }

    #[test]
    fn nothing_on_path_lists_candidates() {
        let err = resolve_interpreter_with(None, &no_env, &[]).unwrap_err();
        assert!(err.to_string().contains("python3, python"));
    }
}
