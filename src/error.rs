//! Error types for ragsetup operations.
//!
//! This module defines [`SetupError`], the error type used for fatal and
//! unexpected conditions, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Advisory failures (a package that will not install, a missing
//!   credential) are stage outcomes, not errors. They are reported through
//!   the UI and never travel through `Result`.
//! - `SetupError` covers the conditions that end a run: an unusable
//!   interpreter, a malformed config file, an I/O failure outside the
//!   guarded stages.
//! - `anyhow::Error` (via `SetupError::Other`) wraps anything unexpected.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ragsetup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file named on the command line does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The Python interpreter could not be run at all.
    #[error("Could not run Python interpreter '{interpreter}': {message}")]
    InterpreterUnavailable {
        interpreter: String,
        message: String,
    },

    /// The interpreter ran but its version output was not understood.
    #[error("Could not parse a version from '{output}'")]
    VersionParse { output: String },

    /// A subprocess could not be started.
    #[error("Command failed to start: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ragsetup operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = SetupError::ConfigNotFound {
            path: PathBuf::from("/foo/setup.yml"),
        };
        assert!(err.to_string().contains("/foo/setup.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SetupError::ConfigParseError {
            path: PathBuf::from("/project/.ragsetup/config.yml"),
            message: "invalid type".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/.ragsetup/config.yml"));
        assert!(msg.contains("invalid type"));
    }

    #[test]
    fn interpreter_unavailable_names_interpreter() {
        let err = SetupError::InterpreterUnavailable {
            interpreter: "python3.12".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3.12"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn version_parse_shows_output() {
        let err = SetupError::VersionParse {
            output: "garbage".into(),
        };
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn command_failed_displays_command_and_message() {
        let err = SetupError::CommandFailed {
            command: "streamlit version".into(),
            message: "not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("streamlit version"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: SetupError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
