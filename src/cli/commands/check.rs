//! Check command implementation.
//!
//! The `launchpad check` command runs the read-only preflight and reports
//! what is missing. It never installs or launches anything.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_config, validate};
use crate::error::{LaunchError, Result};
use crate::requirements::PreflightReport;
use crate::runner::LaunchPipeline;
use crate::shell::{ProcessRunner, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    config_path: Option<PathBuf>,
    python: Option<PathBuf>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config_path: None,
            python: None,
        }
    }

    /// Load configuration from an explicit file instead of discovering it.
    pub fn with_config_path(mut self, path: Option<&Path>) -> Self {
        self.config_path = path.map(Path::to_path_buf);
        self
    }

    /// Use a specific interpreter instead of resolving one.
    pub fn with_python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = Some(python.into());
        self
    }

    /// Execute with the given process runner.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn ProcessRunner,
    ) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;

        let mut pipeline = LaunchPipeline::new(&config, &self.project_root, runner);
        if let Some(python) = &self.python {
            pipeline = pipeline.with_python(python.clone());
        }
        let report = pipeline.preflight()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| LaunchError::Other(e.into()))?;
            println!("{}", json);
        } else {
            show_report(ui, &report);
        }

        if report.is_ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

fn show_report(ui: &mut dyn UserInterface, report: &PreflightReport) {
    ui.show_section("Data files");
    if report.files_ok() {
        ui.success("All data files found!");
    } else {
        for file in &report.missing_files {
            ui.error(&format!("Missing: {}", file));
        }
    }

    ui.show_section("Python packages");
    match &report.missing_packages {
        None => ui.warning("Skipped until all data files are present"),
        Some(missing) if missing.is_empty() => {
            ui.success("All required packages are installed!");
        }
        Some(missing) => ui.error(&format!("Missing packages: {}", missing.join(", "))),
    }
    if let Some(python) = &report.python {
        ui.message(&format!("Interpreter: {}", python));
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &SystemRunner)
    }
}
