//! The package table and the package manager seam.

use std::collections::HashMap;

use crate::config::ProbeStrategy;
use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// A Python package the application needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSpec {
    /// Distribution name passed to pip (e.g., `beautifulsoup4`).
    pub display_name: &'static str,
    /// Module name used by the import probe (e.g., `bs4`).
    pub probe_identifier: &'static str,
}

impl PackageSpec {
    /// Create a package spec.
    pub const fn new(display_name: &'static str, probe_identifier: &'static str) -> Self {
        Self {
            display_name,
            probe_identifier,
        }
    }
}

/// Packages the RAG application imports, in install order.
pub const REQUIRED_PACKAGES: &[PackageSpec] = &[
    PackageSpec::new("streamlit", "streamlit"),
    PackageSpec::new("google-generativeai", "google.generativeai"),
    PackageSpec::new("langchain", "langchain"),
    PackageSpec::new("langchain-community", "langchain_community"),
    PackageSpec::new("langchain-core", "langchain_core"),
    PackageSpec::new("langchain-qdrant", "langchain_qdrant"),
    PackageSpec::new("qdrant-client", "qdrant_client"),
    PackageSpec::new("pypdf", "pypdf"),
    PackageSpec::new("beautifulsoup4", "bs4"),
    PackageSpec::new("agno", "agno"),
    PackageSpec::new("requests", "requests"),
    PackageSpec::new("numpy", "numpy"),
    PackageSpec::new("python-dotenv", "dotenv"),
];

/// Answers "is this package installed?" and installs it when not.
pub trait PackageManager {
    /// Whether the package is available to the interpreter.
    fn is_installed(&self, package: &PackageSpec) -> bool;

    /// Install the package, blocking until the installer exits.
    ///
    /// With `stream_output` the installer writes straight to the terminal.
    fn install(&self, package: &PackageSpec, stream_output: bool) -> Result<CommandResult>;

    /// The command a user should run to install the package by hand.
    fn manual_install_command(&self, package: &PackageSpec) -> String {
        format!("pip install {}", package.display_name)
    }
}

/// Module import probe. The module name is passed as an argument, never
/// spliced into the code string.
const IMPORT_PROBE: &str = "import importlib, sys; importlib.import_module(sys.argv[1])";

/// pip never prompts and skips its self-update notice.
fn install_env() -> HashMap<String, String> {
    HashMap::from([
        ("PIP_NO_INPUT".to_string(), "1".to_string()),
        ("PIP_DISABLE_PIP_VERSION_CHECK".to_string(), "1".to_string()),
    ])
}

/// pip, driven through `<python> -m pip`.
#[derive(Debug, Clone)]
pub struct Pip {
    python: String,
    strategy: ProbeStrategy,
}

impl Pip {
    /// Create a pip driver for an interpreter.
    pub fn new(python: impl Into<String>, strategy: ProbeStrategy) -> Self {
        Self {
            python: python.into(),
            strategy,
        }
    }

    /// Arguments for the presence probe.
    fn probe_args(&self, package: &PackageSpec) -> Vec<&str> {
        match self.strategy {
            ProbeStrategy::Import => vec!["-c", IMPORT_PROBE, package.probe_identifier],
            ProbeStrategy::Metadata => vec!["-m", "pip", "show", "--quiet", package.display_name],
        }
    }

    /// Arguments for the install command.
    fn install_args(package: &PackageSpec) -> [&str; 4] {
        ["-m", "pip", "install", package.display_name]
    }
}

impl PackageManager for Pip {
    fn is_installed(&self, package: &PackageSpec) -> bool {
        match execute(
            &self.python,
            &self.probe_args(package),
            &CommandOptions::captured(),
        ) {
            Ok(result) => result.success,
            Err(e) => {
                tracing::debug!(package = package.display_name, error = %e, "probe could not run");
                false
            }
        }
    }

    fn install(&self, package: &PackageSpec, stream_output: bool) -> Result<CommandResult> {
        let mut options = if stream_output {
            CommandOptions::default()
        } else {
            CommandOptions::captured()
        };
        options.env = install_env();
        tracing::info!(package = package.display_name, "installing");
        execute(&self.python, &Self::install_args(package), &options)
    }
}
