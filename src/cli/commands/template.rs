//! Template command implementation.
//!
//! The `ragsetup template` command writes the secrets template.

use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::secrets::create_env_template;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The template command implementation.
pub struct TemplateCommand {
    project_root: PathBuf,
    config: SetupConfig,
}

impl TemplateCommand {
    /// Create a new template command.
    pub fn new(project_root: &Path, config: SetupConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }
}

impl Command for TemplateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.config.template_path_in(&self.project_root);
        Ok(CommandResult::from_outcome(create_env_template(&path, ui)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::ENV_TEMPLATE;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn writes_to_configured_path() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig {
            template_path: PathBuf::from("example.env"),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = TemplateCommand::new(temp.path(), config)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("example.env")).unwrap(),
            ENV_TEMPLATE
        );
        assert!(ui.has_success("Created example.env file"));
    }

    #[test]
    fn unwritable_path_exits_nonzero() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig {
            template_path: PathBuf::from("no/such/dir/.env.template"),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = TemplateCommand::new(temp.path(), config)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Failed to create .env.template"));
    }
}
