//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{ConfigOverrides, ProbeStrategy};

/// ragsetup - Environment bootstrap for the Agentic RAG application.
#[derive(Debug, Parser)]
#[command(name = "ragsetup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .ragsetup/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter to check and install into
    #[arg(long, global = true, env = "RAGSETUP_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Show verbose output (stream pip output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every setup stage (default if no command specified)
    Run(RunArgs),

    /// Check the Python version only
    Python,

    /// Check and install Python packages only
    Deps(DepsArgs),

    /// Smoke-test the Streamlit launcher only
    Probe(ProbeArgs),

    /// Check API key environment variables only
    Env(EnvArgs),

    /// Write the .env template only
    Template(TemplateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Report missing packages without installing them
    #[arg(long)]
    pub no_install: bool,

    /// How package presence is checked
    #[arg(long, value_enum)]
    pub probe: Option<ProbeStrategy>,

    /// Seconds to wait for the launcher
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// .env file layered under the process environment
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Where to write the template
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl RunArgs {
    /// Config values this invocation overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            probe: self.probe,
            timeout_secs: self.timeout,
            template_path: self.template.clone(),
            env_file: self.env_file.clone(),
            ..Default::default()
        }
    }
}

/// Arguments for the `deps` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DepsArgs {
    /// Report missing packages without installing them
    #[arg(long)]
    pub no_install: bool,

    /// How package presence is checked
    #[arg(long, value_enum)]
    pub probe: Option<ProbeStrategy>,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Seconds to wait for the launcher
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    /// .env file layered under the process environment
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,
}

/// Arguments for the `template` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TemplateArgs {
    /// Where to write the template
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
