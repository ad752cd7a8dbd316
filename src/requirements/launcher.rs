//! Web-UI launcher smoke test.
//!
//! Runs `<launcher> version` with captured output and a deadline. The
//! three outcomes are kept apart so callers never have to interpret a raw
//! exit status.

use std::time::Duration;

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::shell::{display_command, execute, CommandOptions};
use crate::ui::UserInterface;

/// Subcommand that asks the launcher for its version.
pub const VERSION_SUBCOMMAND: &str = "version";

/// A launcher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherCommand {
    /// Display name (e.g., "Streamlit").
    pub name: String,
    /// Program to run.
    pub program: String,
    /// Arguments placed before the `version` subcommand.
    pub args: Vec<String>,
    /// How long to wait.
    pub timeout: Duration,
}

impl LauncherCommand {
    /// Build the launcher command from configuration.
    pub fn from_config(config: &SetupConfig) -> Self {
        Self {
            name: config.launcher.name.clone(),
            program: config.launcher_program().to_string(),
            args: config.launcher.args.clone(),
            timeout: config.launcher.timeout(),
        }
    }

    /// Full argument list including the `version` subcommand.
    pub fn version_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(VERSION_SUBCOMMAND.to_string());
        args
    }

    /// The command line as a display string.
    pub fn display(&self) -> String {
        display_command(&self.program, &self.version_args())
    }
}

/// Outcome of the launcher smoke test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Exited zero; carries the trimmed version output.
    Working { version: String },
    /// Ran and exited non-zero.
    Failed { exit_code: Option<i32> },
    /// Could not be run to completion (missing binary, timeout).
    Error { message: String },
}

impl ProbeOutcome {
    /// Whether the launcher works.
    pub fn is_working(&self) -> bool {
        matches!(self, Self::Working { .. })
    }
}

/// Run the launcher's version subcommand.
pub fn probe_launcher(launcher: &LauncherCommand) -> ProbeOutcome {
    let options = CommandOptions::captured().with_timeout(launcher.timeout);

    match execute(&launcher.program, &launcher.version_args(), &options) {
        Ok(result) if result.timed_out => ProbeOutcome::Error {
            message: format!(
                "'{}' timed out after {} seconds",
                launcher.display(),
                launcher.timeout.as_secs_f32()
            ),
        },
        Ok(result) if result.success => ProbeOutcome::Working {
            version: result.stdout.trim().to_string(),
        },
        Ok(result) => {
            tracing::debug!(stderr = %result.stderr.trim(), "launcher exited non-zero");
            ProbeOutcome::Failed {
                exit_code: result.exit_code,
            }
        }
        Err(SetupError::CommandFailed { command, message }) => ProbeOutcome::Error {
            message: format!("{}: {}", command, message),
        },
        Err(e) => ProbeOutcome::Error {
            message: e.to_string(),
        },
    }
}

/// Print the probe outcome.
pub fn report_probe(name: &str, outcome: &ProbeOutcome, ui: &mut dyn UserInterface) {
    match outcome {
        ProbeOutcome::Working { version } => {
            ui.success(&format!("{} is working correctly", name));
            ui.show_hint(&format!("Version: {}", version));
        }
        ProbeOutcome::Failed { .. } => {
            ui.error(&format!("{} test failed", name));
        }
        ProbeOutcome::Error { message } => {
            ui.error(&format!("{} test error: {}", name, message));
        }
    }
}
