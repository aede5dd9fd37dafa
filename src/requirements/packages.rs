//! Python package preflight.
//!
//! Each package is probed by asking the interpreter to import it. This is a
//! capability check only: any importable version satisfies it.

use std::path::Path;

use crate::config::PackageSpec;
use crate::shell::{ProcessRunner, ProcessSpec};

/// Probes whether packages are importable by a given interpreter.
pub struct PackageProbe<'a> {
    runner: &'a dyn ProcessRunner,
    python: &'a Path,
    cwd: &'a Path,
}

impl<'a> PackageProbe<'a> {
    /// Create a probe for `python`, running in `cwd`.
    pub fn new(runner: &'a dyn ProcessRunner, python: &'a Path, cwd: &'a Path) -> Self {
        Self {
            runner,
            python,
            cwd,
        }
    }

    /// The command used to probe one package.
    pub fn probe_command(&self, package: &PackageSpec) -> ProcessSpec {
        ProcessSpec::new(self.python)
            .arg("-c")
            .arg(format!("import {}", package.import_name()))
            .current_dir(self.cwd)
    }

    /// Whether a single package imports cleanly.
    ///
    /// A probe that cannot be started counts as not importable.
    pub fn is_importable(&self, package: &PackageSpec) -> bool {
        match self.runner.run_captured(&self.probe_command(package)) {
            Ok(result) => {
                tracing::debug!(
                    package = package.name(),
                    module = %package.import_name(),
                    importable = result.success,
                    "Probed package"
                );
                if !result.success {
                    tracing::debug!(package = package.name(), "{}", result.stderr.trim());
                }
                result.success
            }
            Err(e) => {
                tracing::debug!(package = package.name(), "Probe failed to run: {}", e);
                false
            }
        }
    }

    /// Return the distribution names of packages that failed to import,
    /// in the order given.
    pub fn missing(&self, packages: &[PackageSpec]) -> Vec<String> {
        packages
            .iter()
            .filter(|p| !self.is_importable(p))
            .map(|p| p.name().to_string())
            .collect()
    }
}
