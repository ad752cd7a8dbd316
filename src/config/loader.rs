//! Configuration file discovery and loading.

use crate::config::schema::{ConfigOverrides, SetupConfig};
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding ragsetup's project files.
pub const CONFIG_DIR: &str = ".ragsetup";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Default config location for a project.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load the configuration for a project.
///
/// With an explicit path the file must exist. Without one, the project's
/// `.ragsetup/config.yml` is used when present and built-in defaults
/// otherwise. Command-line overrides are applied last.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(
    project_root: &Path,
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SetupConfig> {
    let mut config = match explicit {
        Some(path) => load_config_file(path)?,
        None => {
            let path = default_config_path(project_root);
            if path.is_file() {
                load_config_file(&path)?
            } else {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                SetupConfig::default()
            }
        }
    };

    config.apply(overrides);
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Load a single config file and parse it into [`SetupConfig`].
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`SetupConfig`].
///
/// An empty document is treated as "all defaults".
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
