//! Package check results.
//!
//! Each package the dependency check visits produces a [`CheckResult`];
//! the ordered list is summarized at the end of the stage.

/// How a single package ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    /// The probe succeeded without installing anything.
    AlreadyInstalled,
    /// The probe failed and the install succeeded.
    Installed,
    /// The probe failed and the install failed.
    InstallFailed,
    /// The probe failed and installing was disabled.
    NotInstalled,
}

impl PackageStatus {
    /// Whether the package is usable after the check.
    pub fn succeeded(self) -> bool {
        matches!(self, Self::AlreadyInstalled | Self::Installed)
    }
}

/// The result of checking one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The package's display (distribution) name.
    pub subject: String,
    /// How the check ended.
    pub status: PackageStatus,
}

impl CheckResult {
    /// Create a result.
    pub fn new(subject: impl Into<String>, status: PackageStatus) -> Self {
        Self {
            subject: subject.into(),
            status,
        }
    }

    /// Whether the package is usable.
    pub fn succeeded(&self) -> bool {
        self.status.succeeded()
    }
}

/// All results of a dependency check, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    /// Per-package results.
    pub results: Vec<CheckResult>,
    /// Number of install commands that were run.
    pub install_attempts: usize,
}

impl DependencyReport {
    /// Names of packages that are not usable.
    pub fn failed(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.succeeded())
            .map(|r| r.subject.as_str())
            .collect()
    }

    /// Whether every package is usable.
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(CheckResult::succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_statuses_succeed() {
        assert!(PackageStatus::AlreadyInstalled.succeeded());
        assert!(PackageStatus::Installed.succeeded());
        assert!(!PackageStatus::InstallFailed.succeeded());
        assert!(!PackageStatus::NotInstalled.succeeded());
    }

    #[test]
    fn report_lists_failures_in_order() {
        let report = DependencyReport {
            results: vec![
                CheckResult::new("streamlit", PackageStatus::AlreadyInstalled),
                CheckResult::new("agno", PackageStatus::InstallFailed),
                CheckResult::new("numpy", PackageStatus::Installed),
                CheckResult::new("pypdf", PackageStatus::NotInstalled),
            ],
            install_attempts: 2,
        };

        assert_eq!(report.failed(), vec!["agno", "pypdf"]);
        assert!(!report.all_succeeded());
    }

    #[test]
    fn empty_report_succeeds() {
        let report = DependencyReport::default();
        assert!(report.all_succeeded());
        assert!(report.failed().is_empty());
    }
}
