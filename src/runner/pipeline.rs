//! The setup-and-launch sequence.
//!
//! Four gated steps run in order: data files, package probes, a single
//! install attempt when something is missing, then the dashboard in the
//! foreground. A step can only stop the steps after it.

use std::path::{Path, PathBuf};

use crate::config::LaunchConfig;
use crate::error::{LaunchError, Result};
use crate::requirements::{
    install_command, install_from_manifest, missing_data_files, resolve_interpreter,
    PackageProbe, PreflightReport,
};
use crate::shell::{ChildExit, ProcessRunner, ProcessSpec};
use crate::ui::UserInterface;

/// Options for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Report the install and launch commands instead of running them.
    pub dry_run: bool,
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The dashboard ran and exited on its own.
    Completed { exit_code: Option<i32> },
    /// The user interrupted the dashboard.
    Stopped,
    /// A step failed and the rest of the sequence was skipped.
    Failed(LaunchError),
}

impl RunOutcome {
    /// Whether the run counts as successful. A user stop is not a failure.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Runs the preflight checks, installer and launcher for one project.
pub struct LaunchPipeline<'a> {
    config: &'a LaunchConfig,
    project_root: &'a Path,
    runner: &'a dyn ProcessRunner,
    python: Option<PathBuf>,
}

impl<'a> LaunchPipeline<'a> {
    /// Create a pipeline. The interpreter is resolved on first use.
    pub fn new(
        config: &'a LaunchConfig,
        project_root: &'a Path,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            config,
            project_root,
            runner,
            python: None,
        }
    }

    /// Use a specific interpreter instead of resolving one.
    pub fn with_python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = Some(python.into());
        self
    }

    fn python(&self) -> Result<PathBuf> {
        match &self.python {
            Some(python) => Ok(python.clone()),
            None => resolve_interpreter(self.config.settings.python.as_deref()),
        }
    }

    /// The command that starts the dashboard.
    pub fn launch_command(&self, python: &Path) -> ProcessSpec {
        let app = &self.config.app;
        let mut spec = ProcessSpec::new(python)
            .args(["-m", "streamlit", "run"])
            .arg(app.script.as_str());
        if let Some(port) = app.port {
            spec = spec.arg("--server.port").arg(port.to_string());
        }
        spec.args(app.args.iter().cloned())
            .current_dir(self.project_root)
    }

    /// Run the read-only checks without installing or launching.
    ///
    /// The package check is skipped when data files are missing, matching
    /// the order of a real run.
    pub fn preflight(&self) -> Result<PreflightReport> {
        let missing_files = missing_data_files(self.project_root, &self.config.data_files);
        if !missing_files.is_empty() {
            return Ok(PreflightReport {
                missing_files,
                ..Default::default()
            });
        }

        let python = self.python()?;
        let probe = PackageProbe::new(self.runner, &python, self.project_root);
        Ok(PreflightReport {
            missing_files,
            missing_packages: Some(probe.missing(&self.config.packages)),
            python: Some(python.display().to_string()),
        })
    }

    /// Run the whole sequence.
    ///
    /// Step failures are reported through `ui` and returned as
    /// [`RunOutcome::Failed`]. Only problems that prevent the sequence from
    /// starting at all, such as a missing interpreter, are returned as `Err`.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        options: &PipelineOptions,
    ) -> Result<RunOutcome> {
        ui.show_header(&format!("{} Setup", self.config.app_name));

        if options.dry_run {
            ui.message("Dry run: install and launch commands will be shown, not run");
        }

        if let Err(err) = self.check_files(ui) {
            return Ok(RunOutcome::Failed(err));
        }

        let python = self.python()?;
        tracing::info!("Using interpreter {}", python.display());

        let missing = self.check_packages(ui, &python);
        if !missing.is_empty() {
            if let Err(err) = self.install(ui, &python, options) {
                return Ok(RunOutcome::Failed(err));
            }
        }

        Ok(self.launch(ui, &python, options))
    }

    fn check_files(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_section("Checking data files...");

        let missing = missing_data_files(self.project_root, &self.config.data_files);
        if missing.is_empty() {
            ui.success("All data files found!");
            return Ok(());
        }

        let detailed = ui.output_mode().shows_messages();
        if detailed {
            ui.error("Missing required data files:");
            for file in &missing {
                ui.message(&format!("   - {}", file));
            }
            ui.message("");
            ui.message("Please ensure all data files are in the current directory.");
        }

        // Quiet output drops the list, so the names go on the error line.
        let err = LaunchError::MissingDataFiles { files: missing };
        if !detailed {
            ui.error(&err.to_string());
        }
        tracing::debug!("{}", err);
        Err(err)
    }

    fn check_packages(&self, ui: &mut dyn UserInterface, python: &Path) -> Vec<String> {
        ui.show_section("Checking Python packages...");

        let probe = PackageProbe::new(self.runner, python, self.project_root);
        let mut missing = Vec::new();
        for package in &self.config.packages {
            let mut spinner = ui.start_spinner(&format!("Checking {}...", package.name()));
            if probe.is_importable(package) {
                spinner.finish_success(package.name());
            } else {
                spinner.finish_error(package.name());
                missing.push(package.name().to_string());
            }
        }

        if missing.is_empty() {
            ui.success("All required packages are installed!");
        } else {
            ui.error(&format!("Missing packages: {}", missing.join(", ")));
        }
        missing
    }

    fn install(
        &self,
        ui: &mut dyn UserInterface,
        python: &Path,
        options: &PipelineOptions,
    ) -> Result<()> {
        ui.message("Installing missing packages...");

        if options.dry_run {
            let spec = install_command(python, &self.config.manifest, self.project_root);
            ui.message(&format!("Would run: {}", spec.display()));
            return Ok(());
        }

        match install_from_manifest(self.runner, python, &self.config.manifest, self.project_root)
        {
            Ok(()) => {
                ui.success("All packages installed successfully!");
                Ok(())
            }
            Err(err) => {
                ui.error(&format!("Error installing packages: {}", err));
                Err(err)
            }
        }
    }

    fn launch(
        &self,
        ui: &mut dyn UserInterface,
        python: &Path,
        options: &PipelineOptions,
    ) -> RunOutcome {
        ui.show_section("Starting Streamlit application...");
        ui.message(&format!(
            "The app will open in your default browser at {}",
            self.config.app.url()
        ));
        ui.message("Press Ctrl+C to stop the application");
        ui.show_rule();

        let spec = self.launch_command(python);
        if options.dry_run {
            ui.message(&format!("Would run: {}", spec.display()));
            return RunOutcome::Completed { exit_code: None };
        }

        match self.runner.run_foreground(&spec) {
            Ok(ChildExit::Interrupted) => {
                ui.message("");
                ui.success("Application stopped by user");
                RunOutcome::Stopped
            }
            Ok(ChildExit::Exited { code: Some(0) }) => {
                RunOutcome::Completed { exit_code: Some(0) }
            }
            Ok(ChildExit::Exited { code }) => {
                match code {
                    Some(code) => ui.warning(&format!("Application exited with status {}", code)),
                    None => ui.warning("Application was terminated by a signal"),
                }
                tracing::debug!("Dashboard exited with {:?}", code);
                RunOutcome::Completed { exit_code: code }
            }
            Err(err) => {
                let err = match err {
                    LaunchError::SpawnFailed { command, source } => LaunchError::LaunchFailed {
                        command,
                        message: source.to_string(),
                    },
                    other => other,
                };
                ui.error(&format!("Error running application: {}", err));
                RunOutcome::Failed(err)
            }
        }
    }
}
