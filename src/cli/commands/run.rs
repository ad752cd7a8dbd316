//! Run command implementation.
//!
//! The `ragsetup run` command executes every setup stage.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::SetupConfig;
use crate::error::Result;
use crate::requirements::{CheckOptions, Pip, SystemPython};
use crate::runner::SetupPipeline;
use crate::secrets::EnvSnapshot;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config: SetupConfig,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config: SetupConfig, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interpreter = SystemPython::new(&self.config.python);
        let pip = Pip::new(&self.config.python, self.config.probe);
        let env = EnvSnapshot::from_process();
        let options = CheckOptions {
            install_missing: !self.args.no_install,
            stream_output: ui.output_mode().shows_command_output(),
        };

        let report = SetupPipeline::new(&self.config, &self.project_root, &interpreter, &pip, env)
            .with_check_options(options)
            .run(ui);

        // Advisory problems are already on screen; only the gate fails the run.
        Ok(CommandResult::from_outcome(!report.aborted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn run_command_creation() {
        let temp = TempDir::new().unwrap();
        let args = RunArgs {
            no_install: true,
            ..Default::default()
        };
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), args);
        assert!(cmd.args().no_install);
    }

    #[test]
    fn missing_interpreter_fails_the_run() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig {
            python: "ragsetup-no-such-python".to_string(),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = RunCommand::new(temp.path(), config, RunArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Setup failed: Incompatible Python version"));
        assert!(!temp.path().join(".env.template").exists());
    }
}
