//! Env command implementation.
//!
//! The `ragsetup env` command reports which API keys are set.

use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::secrets::{
    layer_env_file, report_credentials, scan_credentials, EnvSnapshot, REQUIRED_ENV_VARS,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The env command implementation.
pub struct EnvCommand {
    project_root: PathBuf,
    config: SetupConfig,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(project_root: &Path, config: SetupConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }
}

impl Command for EnvCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env_file = self.config.env_file_in(&self.project_root);
        let env = layer_env_file(EnvSnapshot::from_process(), env_file.as_deref(), ui);
        let checks = scan_credentials(REQUIRED_ENV_VARS, &env);
        report_credentials(&checks, ui);

        // A missing optional key is only a warning.
        Ok(CommandResult::from_outcome(
            !checks.iter().any(|c| c.is_blocking()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn reports_one_line_per_credential() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        EnvCommand::new(temp.path(), SetupConfig::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.transcript().len(), REQUIRED_ENV_VARS.len());
    }

    #[test]
    fn env_file_supplies_values() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("test.env"),
            "RAGSETUP_TEST_ONLY=1\nEXA_API_KEY=exa-from-file-123\n",
        )
        .unwrap();
        let config = SetupConfig {
            env_file: Some(PathBuf::from("test.env")),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        EnvCommand::new(temp.path(), config)
            .execute(&mut ui)
            .unwrap();

        // Unless the test environment already sets it.
        if std::env::var_os("EXA_API_KEY").is_none() {
            assert!(ui.has_success("Exa AI API Key (Optional): exa-from..."));
        }
    }
}
