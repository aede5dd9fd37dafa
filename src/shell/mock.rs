//! Scripted process runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything. Every
//! call is recorded, and outcomes are chosen by matching a substring of the
//! command line.
//!
//! # Example
//!
//! ```
//! use launchpad::shell::{MockRunner, ProcessRunner, ProcessSpec};
//!
//! let runner = MockRunner::new();
//! runner.fail_captured("import xgboost", 1);
//!
//! let probe = ProcessSpec::new("python3").args(["-c", "import xgboost"]);
//! assert!(!runner.run_captured(&probe).unwrap().success);
//! assert_eq!(runner.captured_calls().len(), 1);
//! ```

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use crate::error::{LaunchError, Result};

use super::command::{ChildExit, CommandResult, ProcessRunner, ProcessSpec};

/// Process runner that records calls and returns scripted outcomes.
#[derive(Debug, Default)]
pub struct MockRunner {
    captured_exits: RefCell<Vec<(String, i32)>>,
    spawn_failures: RefCell<Vec<String>>,
    inherited_exit: RefCell<Option<i32>>,
    foreground_exit: RefCell<Option<ChildExit>>,
    captured: RefCell<Vec<ProcessSpec>>,
    inherited: RefCell<Vec<ProcessSpec>>,
    foreground: RefCell<Vec<ProcessSpec>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured commands containing `pattern` exit with `code`.
    pub fn fail_captured(&self, pattern: &str, code: i32) {
        self.captured_exits
            .borrow_mut()
            .push((pattern.to_string(), code));
    }

    /// Commands containing `pattern` fail to spawn.
    pub fn fail_spawn(&self, pattern: &str) {
        self.spawn_failures.borrow_mut().push(pattern.to_string());
    }

    /// Inherited commands exit with `code`.
    pub fn set_inherited_exit(&self, code: i32) {
        *self.inherited_exit.borrow_mut() = Some(code);
    }

    /// Foreground commands end with `exit`.
    pub fn set_foreground_exit(&self, exit: ChildExit) {
        *self.foreground_exit.borrow_mut() = Some(exit);
    }

    /// Commands run via `run_captured`, in order.
    pub fn captured_calls(&self) -> Vec<ProcessSpec> {
        self.captured.borrow().clone()
    }

    /// Commands run via `run_inherited`, in order.
    pub fn inherited_calls(&self) -> Vec<ProcessSpec> {
        self.inherited.borrow().clone()
    }

    /// Commands run via `run_foreground`, in order.
    pub fn foreground_calls(&self) -> Vec<ProcessSpec> {
        self.foreground.borrow().clone()
    }

    /// Total number of commands run through any method.
    pub fn total_calls(&self) -> usize {
        self.captured.borrow().len() + self.inherited.borrow().len() + self.foreground.borrow().len()
    }

    fn check_spawn(&self, spec: &ProcessSpec) -> Result<()> {
        let line = spec.display();
        if self
            .spawn_failures
            .borrow()
            .iter()
            .any(|p| line.contains(p.as_str()))
        {
            return Err(LaunchError::SpawnFailed {
                command: line,
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            });
        }
        Ok(())
    }

    fn result_for(code: i32) -> CommandResult {
        if code == 0 {
            CommandResult::success(String::new(), Duration::ZERO)
        } else {
            CommandResult::failure(Some(code), String::new(), Duration::ZERO)
        }
    }
}

impl ProcessRunner for MockRunner {
    fn run_captured(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        self.captured.borrow_mut().push(spec.clone());
        self.check_spawn(spec)?;

        let line = spec.display();
        let code = self
            .captured_exits
            .borrow()
            .iter()
            .find(|(p, _)| line.contains(p.as_str()))
            .map(|(_, code)| *code)
            .unwrap_or(0);
        Ok(Self::result_for(code))
    }

    fn run_inherited(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        self.inherited.borrow_mut().push(spec.clone());
        self.check_spawn(spec)?;
        Ok(Self::result_for(self.inherited_exit.borrow().unwrap_or(0)))
    }

    fn run_foreground(&self, spec: &ProcessSpec) -> Result<ChildExit> {
        self.foreground.borrow_mut().push(spec.clone());
        self.check_spawn(spec)?;
        Ok(self
            .foreground_exit
            .borrow()
            .unwrap_or(ChildExit::Exited { code: Some(0) }))
    }
}
