//! Launchpad CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use launchpad::cli::{Cli, CommandDispatcher};
use launchpad::config::load_config;
use launchpad::shell::is_ci;
use launchpad::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with the dashboard's stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("launchpad=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("launchpad=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Flags win; otherwise `settings.default_output` from config, if it loads.
fn output_mode(cli: &Cli, project_root: &Path) -> OutputMode {
    if cli.quiet {
        return OutputMode::Quiet;
    }
    if cli.verbose {
        return OutputMode::Verbose;
    }
    load_config(project_root, cli.config.as_deref())
        .ok()
        .and_then(|config| config.settings.default_output)
        .map(OutputMode::from)
        .unwrap_or(OutputMode::Normal)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Launchpad starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = create_ui(!is_ci(), output_mode(&cli, &project_root));

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
