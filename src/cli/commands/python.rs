//! Python command implementation.
//!
//! The `ragsetup python` command runs the version gate on its own.

use crate::config::SetupConfig;
use crate::error::Result;
use crate::requirements::{check_python_version, SystemPython};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The python command implementation.
pub struct PythonCommand {
    config: SetupConfig,
}

impl PythonCommand {
    /// Create a new python command.
    pub fn new(config: SetupConfig) -> Self {
        Self { config }
    }
}

impl Command for PythonCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interpreter = SystemPython::new(&self.config.python);
        let version = check_python_version(&interpreter, self.config.min_python, ui);
        Ok(CommandResult::from_outcome(version.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn unrunnable_interpreter_exits_nonzero() {
        let config = SetupConfig {
            python: "ragsetup-no-such-python".to_string(),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = PythonCommand::new(config).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_error("ragsetup-no-such-python"));
    }
}
