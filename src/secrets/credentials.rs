//! Credential scan.
//!
//! Reads each credential from an [`EnvSnapshot`] rather than the live
//! process environment, so the scan is deterministic under test.

use std::collections::HashMap;
use std::path::Path;

use crate::config::EnvFileParser;
use crate::error::Result;
use crate::secrets::mask::masked_preview;
use crate::ui::{StatusKind, UserInterface};

/// Marker in a description that makes a credential optional.
pub const OPTIONAL_MARKER: &str = "(Optional)";

/// A credential the application reads from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVarSpec {
    /// Variable name.
    pub name: &'static str,
    /// Human-readable description printed in the report.
    pub description: &'static str,
}

impl EnvVarSpec {
    /// Create a credential spec.
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    /// Whether a missing value is only a warning.
    pub fn optional(&self) -> bool {
        self.description.contains(OPTIONAL_MARKER)
    }
}

/// Credentials the RAG application needs.
pub const REQUIRED_ENV_VARS: &[EnvVarSpec] = &[
    EnvVarSpec::new("GOOGLE_API_KEY", "Google AI API Key"),
    EnvVarSpec::new("QDRANT_API_KEY", "Qdrant API Key"),
    EnvVarSpec::new("QDRANT_URL", "Qdrant URL"),
    EnvVarSpec::new("EXA_API_KEY", "Exa AI API Key (Optional)"),
];

/// A point-in-time view of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Layer variables from an env file underneath this snapshot.
    ///
    /// Values already present (even empty ones) win over the file.
    pub fn with_fallback(mut self, fallback: HashMap<String, String>) -> Self {
        for (key, value) in fallback {
            self.vars.entry(key).or_insert(value);
        }
        self
    }

    /// Layer an env file from disk. A missing file contributes nothing.
    pub fn with_env_file(self, path: &Path) -> Result<Self> {
        let vars = EnvFileParser::load_optional(path)?;
        tracing::debug!(path = %path.display(), count = vars.len(), "loaded env file");
        Ok(self.with_fallback(vars))
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Layer an optional env file, falling back to `env` alone when the file
/// cannot be read. The failure is reported as a warning.
pub fn layer_env_file(
    env: EnvSnapshot,
    path: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> EnvSnapshot {
    let Some(path) = path else {
        return env;
    };
    match env.clone().with_env_file(path) {
        Ok(layered) => layered,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "env file unreadable");
            ui.warning(&format!("Could not read {}: {}", path.display(), e));
            env
        }
    }
}

/// What the scan found for one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// Set and non-empty; carries the masked preview.
    Present { preview: String },
    /// Unset or empty.
    Missing { optional: bool },
}

impl CredentialStatus {
    /// Status icon for the report line.
    pub fn kind(&self) -> StatusKind {
        match self {
            Self::Present { .. } => StatusKind::Success,
            Self::Missing { optional: true } => StatusKind::Warning,
            Self::Missing { optional: false } => StatusKind::Failed,
        }
    }
}

/// Scan result for one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCheck {
    pub spec: EnvVarSpec,
    pub status: CredentialStatus,
}

impl CredentialCheck {
    /// The report line without its icon.
    pub fn line(&self) -> String {
        match &self.status {
            CredentialStatus::Present { preview } => {
                format!("{}: {}", self.spec.description, preview)
            }
            CredentialStatus::Missing { .. } => format!("{}: Not set", self.spec.description),
        }
    }

    /// Whether a required credential is missing.
    pub fn is_blocking(&self) -> bool {
        self.status == CredentialStatus::Missing { optional: false }
    }
}

/// Check every credential in `specs` against the snapshot.
pub fn scan_credentials(specs: &[EnvVarSpec], env: &EnvSnapshot) -> Vec<CredentialCheck> {
    specs
        .iter()
        .map(|spec| {
            let status = match env.get(spec.name) {
                Some(value) if !value.is_empty() => CredentialStatus::Present {
                    preview: masked_preview(value),
                },
                _ => CredentialStatus::Missing {
                    optional: spec.optional(),
                },
            };
            CredentialCheck {
                spec: *spec,
                status,
            }
        })
        .collect()
}

/// Print one line per credential.
pub fn report_credentials(checks: &[CredentialCheck], ui: &mut dyn UserInterface) {
    for check in checks {
        ui.status(check.status.kind(), &check.line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::io::Write;

    fn full_env() -> EnvSnapshot {
        EnvSnapshot::from_pairs([
            ("GOOGLE_API_KEY", "AIzaSyD-0123456789ab"),
            ("QDRANT_API_KEY", "qd-12345"),
            ("QDRANT_URL", "https://abc.cloud.qdrant.io:6333"),
            ("EXA_API_KEY", "exa"),
        ])
    }

    #[test]
    fn only_exa_is_optional() {
        let optional: Vec<_> = REQUIRED_ENV_VARS
            .iter()
            .filter(|s| s.optional())
            .map(|s| s.name)
            .collect();
        assert_eq!(optional, vec!["EXA_API_KEY"]);
    }

    #[test]
    fn present_values_are_masked() {
        let checks = scan_credentials(REQUIRED_ENV_VARS, &full_env());
        let mut ui = MockUI::new();

        report_credentials(&checks, &mut ui);

        assert_eq!(
            ui.successes(),
            &[
                "Google AI API Key: AIzaSyD-...",
                "Qdrant API Key: qd-12345",
                "Qdrant URL: https:/...",
                "Exa AI API Key (Optional): exa",
            ]
        );
        assert!(ui.warnings().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn missing_optional_warns_and_missing_required_fails() {
        let env = EnvSnapshot::from_pairs([("QDRANT_URL", "http://localhost:6333")]);
        let checks = scan_credentials(REQUIRED_ENV_VARS, &env);
        let mut ui = MockUI::new();

        report_credentials(&checks, &mut ui);

        assert_eq!(
            ui.transcript(),
            vec![
                "✗ Google AI API Key: Not set",
                "✗ Qdrant API Key: Not set",
                "✓ Qdrant URL: http://l...",
                "⚠ Exa AI API Key (Optional): Not set",
            ]
        );
        assert_eq!(checks.iter().filter(|c| c.is_blocking()).count(), 2);
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let env = EnvSnapshot::from_pairs([("GOOGLE_API_KEY", "")]);
        let checks = scan_credentials(&REQUIRED_ENV_VARS[..1], &env);

        assert_eq!(
            checks[0].status,
            CredentialStatus::Missing { optional: false }
        );
        assert_eq!(checks[0].line(), "Google AI API Key: Not set");
    }

    #[test]
    fn status_kinds_follow_optionality() {
        assert_eq!(
            CredentialStatus::Present {
                preview: "x".to_string()
            }
            .kind(),
            StatusKind::Success
        );
        assert_eq!(
            CredentialStatus::Missing { optional: true }.kind(),
            StatusKind::Warning
        );
        assert_eq!(
            CredentialStatus::Missing { optional: false }.kind(),
            StatusKind::Failed
        );
    }

    #[test]
    fn process_values_win_over_env_file() {
        let env = EnvSnapshot::from_pairs([("GOOGLE_API_KEY", "from-process")]).with_fallback(
            HashMap::from([
                ("GOOGLE_API_KEY".to_string(), "from-file".to_string()),
                ("QDRANT_URL".to_string(), "http://file".to_string()),
            ]),
        );

        assert_eq!(env.get("GOOGLE_API_KEY"), Some("from-process"));
        assert_eq!(env.get("QDRANT_URL"), Some("http://file"));
    }

    #[test]
    fn env_file_fills_in_missing_credentials() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# local secrets").unwrap();
        writeln!(file, "export QDRANT_API_KEY=\"qdrant-secret-value\"").unwrap();

        let env = EnvSnapshot::default().with_env_file(file.path()).unwrap();
        let checks = scan_credentials(REQUIRED_ENV_VARS, &env);

        assert_eq!(
            checks[1].status,
            CredentialStatus::Present {
                preview: "qdrant-s...".to_string()
            }
        );
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let temp = tempfile::TempDir::new().unwrap();
        let env = EnvSnapshot::default()
            .with_env_file(&temp.path().join(".env"))
            .unwrap();
        assert_eq!(env, EnvSnapshot::default());
    }

    #[test]
    fn unreadable_env_file_warns_and_keeps_process_values() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();
        let env = EnvSnapshot::from_pairs([("GOOGLE_API_KEY", "from-process")]);
        let mut ui = MockUI::new();

        let layered = layer_env_file(env.clone(), Some(&path), &mut ui);

        assert_eq!(layered, env);
        assert!(ui.has_warning("Could not read"));
        assert!(ui.has_warning(".env"));
    }

    #[test]
    fn no_env_file_leaves_snapshot_alone() {
        let env = EnvSnapshot::from_pairs([("QDRANT_URL", "http://localhost:6333")]);
        let mut ui = MockUI::new();

        assert_eq!(layer_env_file(env.clone(), None, &mut ui), env);
        assert!(ui.transcript().is_empty());
    }
}
