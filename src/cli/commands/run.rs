//! Run command implementation.
//!
//! The `launchpad run` command checks prerequisites, installs what is
//! missing and starts the dashboard.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{load_config, validate, ConfigPaths, LaunchConfig};
use crate::error::Result;
use crate::runner::{LaunchPipeline, PipelineOptions, RunOutcome};
use crate::shell::{ProcessRunner, SystemRunner};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
    config_path: Option<PathBuf>,
    python: Option<PathBuf>,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
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

        if ui.output_mode() == OutputMode::Verbose {
            self.show_config_source(ui);
        }

        let mut pipeline = LaunchPipeline::new(&config, &self.project_root, runner);
        if let Some(python) = &self.python {
            pipeline = pipeline.with_python(python.clone());
        }

        let options = PipelineOptions {
            dry_run: self.args.dry_run,
        };
        let outcome = pipeline.run(ui, &options)?;
        tracing::debug!("Run finished: {:?}", outcome);

        Ok(self.result_for(&config, &outcome))
    }

    fn show_config_source(&self, ui: &mut dyn UserInterface) {
        if let Some(path) = &self.config_path {
            ui.message(&format!("Config: {}", path.display()));
            return;
        }
        let paths = ConfigPaths::discover(&self.project_root);
        let existing = paths.all_existing();
        if existing.is_empty() {
            ui.message("Config: built-in defaults");
        }
        for path in existing {
            ui.message(&format!("Config: {}", path.display()));
        }
    }

    /// A failed run exits 0 unless exit-code propagation is enabled.
    fn result_for(&self, config: &LaunchConfig, outcome: &RunOutcome) -> CommandResult {
        if outcome.is_success() {
            return CommandResult::success();
        }
        if self.args.propagate_exit_code || config.settings.propagate_exit_code {
            CommandResult::failure(1)
        } else {
            CommandResult {
                success: false,
                exit_code: 0,
            }
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &SystemRunner)
    }
}
