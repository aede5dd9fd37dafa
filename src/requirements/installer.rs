//! Dependency installation from a requirements manifest.
//!
//! Everything in the manifest is installed with a single package-manager
//! call. There is no per-package retry and no partial-install recovery.

use std::path::Path;

use crate::error::{LaunchError, Result};
use crate::shell::{ProcessRunner, ProcessSpec};

/// The pip invocation that installs `manifest`.
pub fn install_command(python: &Path, manifest: &str, cwd: &Path) -> ProcessSpec {
    ProcessSpec::new(python)
        .args(["-m", "pip", "install", "-r"])
        .arg(manifest)
        .current_dir(cwd)
}

/// Install everything listed in `manifest`.
///
/// Succeeds only when the package manager exits with status 0. Any other
/// outcome is returned as an error for the caller to report.
pub fn install_from_manifest(
    runner: &dyn ProcessRunner,
    python: &Path,
    manifest: &str,
    cwd: &Path,
) -> Result<()> {
    let spec = install_command(python, manifest, cwd);
    tracing::info!("Installing packages: {}", spec.display());

    let result = runner.run_inherited(&spec)?;
    if result.success {
        tracing::debug!("Install finished in {:?}", result.duration);
        Ok(())
    } else {
        Err(LaunchError::InstallFailed {
            command: spec.display(),
            code: result.exit_code,
        })
    }
}
