//! Child process execution.
//!
//! Commands are spawned directly (no intermediate shell) from a
//! [`ProcessSpec`]. The [`ProcessRunner`] trait is the seam the preflight,
//! installer and launcher go through, so tests can substitute
//! [`MockRunner`](super::MockRunner).

use crate::error::{LaunchError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use super::interrupt::InterruptFlag;

/// A program invocation with explicit arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Program to execute (resolved via PATH if not absolute).
    pub program: PathBuf,

    /// Arguments, passed verbatim.
    pub args: Vec<String>,

    /// Working directory (inherits ours when None).
    pub cwd: Option<PathBuf>,
}

impl ProcessSpec {
    /// Create a spec for a program with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Human-readable command line, used in messages and logs.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| {
            if a.contains(' ') {
                format!("\"{}\"", a)
            } else {
                a.clone()
            }
        }));
        parts.join(" ")
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> LaunchError {
        LaunchError::SpawnFailed {
            command: self.display(),
            source,
        }
    }
}

/// Result of executing a command to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stderr,
            duration,
            success: false,
        }
    }

    fn from_status(status: ExitStatus, stderr: String, duration: Duration) -> Self {
        if status.success() {
            Self::success(stderr, duration)
        } else {
            Self::failure(status.code(), stderr, duration)
        }
    }
}

/// How a foreground child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// The process exited on its own.
    Exited { code: Option<i32> },
    /// The user interrupted the run (Ctrl+C).
    Interrupted,
}

/// Executes child processes.
pub trait ProcessRunner {
    /// Run to completion with stdout and stderr captured.
    fn run_captured(&self, spec: &ProcessSpec) -> Result<CommandResult>;

    /// Run to completion with all standard streams inherited.
    fn run_inherited(&self, spec: &ProcessSpec) -> Result<CommandResult>;

    /// Run in the foreground with inherited streams, treating a user
    /// interrupt during the wait as a normal stop.
    fn run_foreground(&self, spec: &ProcessSpec) -> Result<ChildExit>;
}

/// Runs real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run_captured(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!("Running (captured): {}", spec.display());

        let output = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| spec.spawn_error(e))?;

        Ok(CommandResult::from_status(
            output.status,
            String::from_utf8_lossy(&output.stderr).to_string(),
            start.elapsed(),
        ))
    }

    fn run_inherited(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!("Running: {}", spec.display());

        let status = spec
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spec.spawn_error(e))?;

        Ok(CommandResult::from_status(status, String::new(), start.elapsed()))
    }

    fn run_foreground(&self, spec: &ProcessSpec) -> Result<ChildExit> {
        let interrupt = InterruptFlag::install()?;
        interrupt.reset();
        tracing::debug!("Running (foreground): {}", spec.display());

        let mut child = spec
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| spec.spawn_error(e))?;

        let status = match child.wait() {
            Ok(status) => status,
            Err(_) if interrupt.is_set() => return Ok(ChildExit::Interrupted),
            Err(e) => return Err(spec.spawn_error(e)),
        };

        if interrupt.is_set() || killed_by_interrupt(&status) {
            tracing::debug!("Foreground process interrupted ({:?})", status);
            return Ok(ChildExit::Interrupted);
        }

        Ok(ChildExit::Exited {
            code: status.code(),
        })
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    const SIGINT: i32 = 2;
    status.signal() == Some(SIGINT)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}
