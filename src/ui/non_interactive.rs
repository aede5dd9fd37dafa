//! Non-interactive UI for CI/headless environments.

use super::theme::RULE_WIDTH;
use super::{NoopSpinner, OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain lines with no colors or spinners, so output stays readable
/// in CI logs and when piped.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_details() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            println!("{}", title);
            println!("{}", "=".repeat(RULE_WIDTH));
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_messages() {
            println!("\n{}", title);
        }
    }

    fn show_rule(&mut self) {
        if self.mode.shows_messages() {
            println!("{}", "=".repeat(RULE_WIDTH));
        }
    }
}
