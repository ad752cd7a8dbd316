//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, ConfigOverrides, SetupConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::deps::DepsCommand;
use super::env::EnvCommand;
use super::probe::ProbeCommand;
use super::python::PythonCommand;
use super::run::RunCommand;
use super::template::TemplateCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Advisory problems are reported through `ui` and the exit code;
    /// `Err` is reserved for conditions the command cannot report itself.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Success or exit code 1.
    pub fn from_outcome(ok: bool) -> Self {
        if ok {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve configuration: defaults, then the config file, then flags.
    fn config(&self, cli: &Cli, mut overrides: ConfigOverrides) -> Result<SetupConfig> {
        overrides.python = cli.python.clone();
        load_config(&self.project_root, cli.config.as_deref(), &overrides)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        match &cli.command {
            Some(Commands::Run(args)) => {
                let config = self.config(cli, args.overrides())?;
                RunCommand::new(root, config, args.clone()).execute(ui)
            }
            Some(Commands::Python) => {
                let config = self.config(cli, ConfigOverrides::default())?;
                PythonCommand::new(config).execute(ui)
            }
            Some(Commands::Deps(args)) => {
                let overrides = ConfigOverrides {
                    probe: args.probe,
                    ..Default::default()
                };
                let config = self.config(cli, overrides)?;
                DepsCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Probe(args)) => {
                let overrides = ConfigOverrides {
                    timeout_secs: args.timeout,
                    ..Default::default()
                };
                let config = self.config(cli, overrides)?;
                ProbeCommand::new(config).execute(ui)
            }
            Some(Commands::Env(args)) => {
                let overrides = ConfigOverrides {
                    env_file: args.env_file.clone(),
                    ..Default::default()
                };
                let config = self.config(cli, overrides)?;
                EnvCommand::new(root, config).execute(ui)
            }
            Some(Commands::Template(args)) => {
                let overrides = ConfigOverrides {
                    template_path: args.output.clone(),
                    ..Default::default()
                };
                let config = self.config(cli, overrides)?;
                TemplateCommand::new(root, config).execute(ui)
            }
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
            None => {
                // Default to run command with default args
                let args = RunArgs::default();
                let config = self.config(cli, args.overrides())?;
                RunCommand::new(root, config, args).execute(ui)
            }
        }
    }
}
