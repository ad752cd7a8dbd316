//! Configuration schema definitions.
//!
//! These structs map to the optional `.ragsetup/config.yml` file. Every
//! field has a default, so an empty file (or no file) yields the stock
//! setup for the RAG application.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shell::default_python;

/// Default launcher timeout in seconds.
pub const DEFAULT_LAUNCHER_TIMEOUT_SECS: u64 = 10;

/// Default name of the secrets template file.
pub const DEFAULT_TEMPLATE_PATH: &str = ".env.template";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Python interpreter used for the version check, probes, and pip.
    pub python: String,

    /// Minimum supported interpreter version.
    pub min_python: MinimumVersion,

    /// How package presence is probed.
    pub probe: ProbeStrategy,

    /// The web-UI launcher smoke test.
    pub launcher: LauncherConfig,

    /// Where the secrets template is written (relative to the project root).
    pub template_path: PathBuf,

    /// Optional `.env` file layered under the process environment.
    pub env_file: Option<PathBuf>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            min_python: MinimumVersion::default(),
            probe: ProbeStrategy::default(),
            launcher: LauncherConfig::default(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            env_file: None,
        }
    }
}

impl SetupConfig {
    /// Apply command-line overrides on top of file values.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(python) = &overrides.python {
            self.python = python.clone();
        }
        if let Some(probe) = overrides.probe {
            self.probe = probe;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.launcher.timeout_secs = secs;
        }
        if let Some(path) = &overrides.template_path {
            self.template_path = path.clone();
        }
        if let Some(path) = &overrides.env_file {
            self.env_file = Some(path.clone());
        }
    }

    /// The launcher program; defaults to the configured interpreter.
    pub fn launcher_program(&self) -> &str {
        self.launcher.program.as_deref().unwrap_or(&self.python)
    }

    /// Template path resolved against the project root.
    pub fn template_path_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.template_path)
    }

    /// Env file path resolved against the project root, if configured.
    pub fn env_file_in(&self, project_root: &Path) -> Option<PathBuf> {
        self.env_file.as_ref().map(|p| project_root.join(p))
    }
}

/// Minimum interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MinimumVersion {
    pub major: u32,
    pub minor: u32,
}

impl Default for MinimumVersion {
    fn default() -> Self {
        Self { major: 3, minor: 8 }
    }
}

impl std::fmt::Display for MinimumVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// How a package's presence is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStrategy {
    /// Ask the interpreter to import the module (`python -c "import x"`).
    #[default]
    Import,
    /// Ask pip for the distribution's metadata (`python -m pip show name`).
    Metadata,
}

/// Web-UI launcher smoke test.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Display name used in the report.
    pub name: String,

    /// Program to run; `None` means the configured Python interpreter.
    pub program: Option<String>,

    /// Arguments placed before the `version` subcommand.
    pub args: Vec<String>,

    /// Seconds to wait before giving up.
    pub timeout_secs: u64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            name: "Streamlit".to_string(),
            program: None,
            args: vec!["-m".to_string(), "streamlit".to_string()],
            timeout_secs: DEFAULT_LAUNCHER_TIMEOUT_SECS,
        }
    }
}

impl LauncherConfig {
    /// Timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Values supplied on the command line that override the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub python: Option<String>,
    pub probe: Option<ProbeStrategy>,
    pub timeout_secs: Option<u64>,
    pub template_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: SetupConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SetupConfig::default());
        assert_eq!(config.min_python, MinimumVersion { major: 3, minor: 8 });
        assert_eq!(config.launcher.timeout_secs, 10);
        assert_eq!(config.template_path, PathBuf::from(".env.template"));
        assert_eq!(config.probe, ProbeStrategy::Import);
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
python: /opt/py311/bin/python
min_python: { major: 3, minor: 10 }
probe: metadata
launcher:
  name: Streamlit CLI
  program: streamlit
  args: []
  timeout_secs: 30
template_path: config/.env.example
env_file: .env
"#;
        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.python, "/opt/py311/bin/python");
        assert_eq!(config.min_python.to_string(), "3.10");
        assert_eq!(config.probe, ProbeStrategy::Metadata);
        assert_eq!(config.launcher.name, "Streamlit CLI");
        assert_eq!(config.launcher_program(), "streamlit");
        assert!(config.launcher.args.is_empty());
        assert_eq!(config.launcher.timeout(), Duration::from_secs(30));
        assert_eq!(config.env_file, Some(PathBuf::from(".env")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<SetupConfig, _> = serde_yaml::from_str("pyhton: python3");
        assert!(result.is_err());
    }

    #[test]
    fn launcher_defaults_to_interpreter_module() {
        let config = SetupConfig {
            python: "python3.12".to_string(),
            ..Default::default()
        };
        assert_eq!(config.launcher_program(), "python3.12");
        assert_eq!(config.launcher.args, vec!["-m", "streamlit"]);
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = SetupConfig::default();
        config.apply(&ConfigOverrides {
            python: Some("py".to_string()),
            probe: Some(ProbeStrategy::Metadata),
            timeout_secs: Some(2),
            template_path: Some(PathBuf::from("out.env")),
            env_file: Some(PathBuf::from(".env.local")),
        });

        assert_eq!(config.python, "py");
        assert_eq!(config.probe, ProbeStrategy::Metadata);
        assert_eq!(config.launcher.timeout_secs, 2);
        assert_eq!(config.template_path, PathBuf::from("out.env"));
        assert_eq!(config.env_file, Some(PathBuf::from(".env.local")));
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = SetupConfig::default();
        config.apply(&ConfigOverrides::default());
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn paths_resolve_against_project_root() {
        let config = SetupConfig {
            env_file: Some(PathBuf::from(".env")),
            ..Default::default()
        };
        let root = Path::new("/work/app");

        assert_eq!(
            config.template_path_in(root),
            PathBuf::from("/work/app/.env.template")
        );
        assert_eq!(
            config.env_file_in(root),
            Some(PathBuf::from("/work/app/.env"))
        );
    }
}
