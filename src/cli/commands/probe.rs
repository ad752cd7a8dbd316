//! Probe command implementation.
//!
//! The `ragsetup probe` command smoke-tests the web-UI launcher.

use crate::config::SetupConfig;
use crate::error::Result;
use crate::requirements::{probe_launcher, report_probe, LauncherCommand};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The probe command implementation.
pub struct ProbeCommand {
    config: SetupConfig,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(config: SetupConfig) -> Self {
        Self { config }
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let launcher = LauncherCommand::from_config(&self.config);
        let outcome = probe_launcher(&launcher);
        report_probe(&launcher.name, &outcome, ui);
        Ok(CommandResult::from_outcome(outcome.is_working()))
    }
}
