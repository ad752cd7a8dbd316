//! Deps command implementation.
//!
//! The `ragsetup deps` command checks (and installs) the package table.

use crate::cli::args::DepsArgs;
use crate::config::SetupConfig;
use crate::error::Result;
use crate::requirements::{CheckOptions, DependencyChecker, Pip, REQUIRED_PACKAGES};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The deps command implementation.
pub struct DepsCommand {
    config: SetupConfig,
    args: DepsArgs,
}

impl DepsCommand {
    /// Create a new deps command.
    pub fn new(config: SetupConfig, args: DepsArgs) -> Self {
        Self { config, args }
    }
}

impl Command for DepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let pip = Pip::new(&self.config.python, self.config.probe);
        let options = CheckOptions {
            install_missing: !self.args.no_install,
            stream_output: ui.output_mode().shows_command_output(),
        };

        let report = DependencyChecker::new(&pip, options).run(REQUIRED_PACKAGES, ui);

        Ok(CommandResult::from_outcome(report.all_succeeded()))
    }
}
