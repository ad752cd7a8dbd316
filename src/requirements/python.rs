//! Python interpreter version gate.
//!
//! The version is read from `<python> --version`. Python 2 prints it to
//! stderr and Python 3 to stdout, so both streams are searched.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::MinimumVersion;
use crate::error::{Result, SetupError};
use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

/// A `(major, minor, micro)` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl PythonVersion {
    /// Create a version triple.
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Extract the first `X.Y[.Z]` version from interpreter output.
    ///
    /// ```
    /// use ragsetup::requirements::PythonVersion;
    ///
    /// let v = PythonVersion::parse("Python 3.11.4").unwrap();
    /// assert_eq!(v, PythonVersion::new(3, 11, 4));
    /// assert_eq!(PythonVersion::parse("Python 3.13.0rc1").unwrap().micro, 0);
    /// assert!(PythonVersion::parse("command not found").is_none());
    /// ```
    pub fn parse(output: &str) -> Option<Self> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("version pattern is valid")
        });

        let caps = re.captures(output)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let micro = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        Some(Self::new(major, minor, micro))
    }

    /// Whether this version satisfies `minimum`.
    ///
    /// Major and minor are compared independently: `4.0` does not satisfy
    /// `3.8`, `4.9` does.
    pub fn is_compatible(&self, minimum: MinimumVersion) -> bool {
        self.major >= minimum.major && self.minor >= minimum.minor
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// The Python installation a setup run targets.
pub trait Interpreter {
    /// Human-readable name (usually the executable path).
    fn name(&self) -> &str;

    /// Query the interpreter version.
    fn version(&self) -> Result<PythonVersion>;
}

/// A Python interpreter reached through its executable.
#[derive(Debug, Clone)]
pub struct SystemPython {
    executable: String,
}

impl SystemPython {
    /// Wrap an executable name or path.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Interpreter for SystemPython {
    fn name(&self) -> &str {
        &self.executable
    }

    fn version(&self) -> Result<PythonVersion> {
        let result = execute(&self.executable, &["--version"], &CommandOptions::captured())
            .map_err(|e| SetupError::InterpreterUnavailable {
                interpreter: self.executable.clone(),
                message: match e {
                    SetupError::CommandFailed { message, .. } => message,
                    other => other.to_string(),
                },
            })?;

        if !result.success {
            return Err(SetupError::InterpreterUnavailable {
                interpreter: self.executable.clone(),
                message: format!(
                    "exited with code {:?}: {}",
                    result.exit_code,
                    result.stderr.trim()
                ),
            });
        }

        let combined = format!("{}\n{}", result.stdout, result.stderr);
        PythonVersion::parse(&combined).ok_or_else(|| SetupError::VersionParse {
            output: combined.trim().to_string(),
        })
    }
}

/// Run the version gate and report it.
///
/// Returns the version when it is compatible. `None` means the pipeline
/// must stop: either the interpreter could not be queried or it is too old.
pub fn check_python_version(
    interpreter: &dyn Interpreter,
    minimum: MinimumVersion,
    ui: &mut dyn UserInterface,
) -> Option<PythonVersion> {
    let version = match interpreter.version() {
        Ok(version) => version,
        Err(e) => {
            tracing::debug!(interpreter = interpreter.name(), error = %e, "version query failed");
            ui.error(&e.to_string());
            ui.error(&format!("Python {}+ is required", minimum));
            return None;
        }
    };

    ui.message(&format!("Python version: {}", version));

    if version.is_compatible(minimum) {
        ui.success("Python version is compatible");
        Some(version)
    } else {
        ui.error(&format!("Python {}+ is required", minimum));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    const MIN: MinimumVersion = MinimumVersion { major: 3, minor: 8 };

    struct FixedInterpreter(Result<PythonVersion>);

    impl Interpreter for FixedInterpreter {
        fn name(&self) -> &str {
            "python-test"
        }

        fn version(&self) -> Result<PythonVersion> {
            match &self.0 {
                Ok(v) => Ok(*v),
                Err(e) => Err(SetupError::VersionParse {
                    output: e.to_string(),
                }),
            }
        }
    }

    #[test]
    fn parses_standard_output() {
        assert_eq!(
            PythonVersion::parse("Python 3.12.1\n"),
            Some(PythonVersion::new(3, 12, 1))
        );
    }

    #[test]
    fn parses_two_component_version() {
        assert_eq!(
            PythonVersion::parse("Python 3.9"),
            Some(PythonVersion::new(3, 9, 0))
        );
    }

    #[test]
    fn parse_rejects_output_without_version() {
        assert_eq!(PythonVersion::parse("Python"), None);
        assert_eq!(PythonVersion::parse(""), None);
    }

    #[test]
    fn display_is_dotted_triple() {
        assert_eq!(PythonVersion::new(3, 8, 10).to_string(), "3.8.10");
    }

    #[test]
    fn minor_at_or_above_minimum_is_compatible() {
        for minor in 8..=14 {
            assert!(PythonVersion::new(3, minor, 0).is_compatible(MIN));
        }
    }

    #[test]
    fn old_python_is_incompatible() {
        assert!(!PythonVersion::new(3, 7, 17).is_compatible(MIN));
        assert!(!PythonVersion::new(2, 7, 18).is_compatible(MIN));
        assert!(!PythonVersion::new(2, 9, 0).is_compatible(MIN));
    }

    #[test]
    fn later_major_compares_minor_independently() {
        assert!(PythonVersion::new(4, 8, 0).is_compatible(MIN));
        assert!(PythonVersion::new(4, 12, 0).is_compatible(MIN));
        assert!(!PythonVersion::new(4, 0, 0).is_compatible(MIN));
    }

    #[test]
    fn gate_passes_compatible_version() {
        let mut ui = MockUI::new();
        let python = FixedInterpreter(Ok(PythonVersion::new(3, 11, 4)));

        let result = check_python_version(&python, MIN, &mut ui);

        assert_eq!(result, Some(PythonVersion::new(3, 11, 4)));
        assert!(ui.has_message("Python version: 3.11.4"));
        assert!(ui.has_success("Python version is compatible"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn gate_rejects_old_version() {
        let mut ui = MockUI::new();
        let python = FixedInterpreter(Ok(PythonVersion::new(3, 7, 9)));

        let result = check_python_version(&python, MIN, &mut ui);

        assert_eq!(result, None);
        assert!(ui.has_message("Python version: 3.7.9"));
        assert!(ui.has_error("Python 3.8+ is required"));
    }

    #[test]
    fn gate_rejects_unqueryable_interpreter() {
        let mut ui = MockUI::new();
        let python = FixedInterpreter(Err(SetupError::VersionParse {
            output: "???".into(),
        }));

        let result = check_python_version(&python, MIN, &mut ui);

        assert_eq!(result, None);
        assert!(ui.has_error("Python 3.8+ is required"));
    }

    #[test]
    fn system_python_missing_executable_is_unavailable() {
        let python = SystemPython::new("ragsetup-no-such-python");

        let err = python.version().unwrap_err();

        assert!(matches!(err, SetupError::InterpreterUnavailable { .. }));
        assert!(err.to_string().contains("ragsetup-no-such-python"));
    }

    #[cfg(unix)]
    #[test]
    fn system_python_reads_version_from_script() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("python");
        std::fs::write(&script, "#!/bin/sh\necho 'Python 3.10.12'\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let python = SystemPython::new(script.to_string_lossy());

        assert_eq!(python.version().unwrap(), PythonVersion::new(3, 10, 12));
    }
}
