//! Dependency checker.
//!
//! Walks the package table, installs what is missing, and summarizes.
//! Nothing here stops the pipeline: a package that will not install is
//! reported with the command to install it by hand.

use crate::requirements::packages::{PackageManager, PackageSpec};
use crate::requirements::status::{CheckResult, DependencyReport, PackageStatus};
use crate::ui::{StatusKind, UserInterface};

/// Options for a dependency check.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Install packages whose probe fails.
    pub install_missing: bool,
    /// Let the installer write directly to the terminal.
    pub stream_output: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            install_missing: true,
            stream_output: false,
        }
    }
}

/// Checks a package table against a package manager.
pub struct DependencyChecker<'a> {
    manager: &'a dyn PackageManager,
    options: CheckOptions,
}

impl<'a> DependencyChecker<'a> {
    /// Create a checker.
    pub fn new(manager: &'a dyn PackageManager, options: CheckOptions) -> Self {
        Self { manager, options }
    }

    /// Check every package, print one line per package, then the summary.
    pub fn run(&self, packages: &[PackageSpec], ui: &mut dyn UserInterface) -> DependencyReport {
        let mut report = DependencyReport::default();

        for package in packages {
            let status = self.check_one(package, &mut report, ui);
            report
                .results
                .push(CheckResult::new(package.display_name, status));
        }

        self.summarize(packages, &report, ui);
        report
    }

    fn check_one(
        &self,
        package: &PackageSpec,
        report: &mut DependencyReport,
        ui: &mut dyn UserInterface,
    ) -> PackageStatus {
        let name = package.display_name;

        if self.manager.is_installed(package) {
            ui.success(&format!("{} is installed", name));
            return PackageStatus::AlreadyInstalled;
        }

        if !self.options.install_missing {
            ui.status(
                StatusKind::Skipped,
                &format!("{} is not installed (install skipped)", name),
            );
            return PackageStatus::NotInstalled;
        }

        ui.error(&format!("{} is not installed. Installing...", name));
        report.install_attempts += 1;

        let mut spinner = ui.start_spinner(&format!("Installing {}...", name));
        match self.manager.install(package, self.options.stream_output) {
            Ok(result) if result.success => {
                spinner.finish_success(&format!("Successfully installed {}", name));
                PackageStatus::Installed
            }
            Ok(result) => {
                spinner.finish_error(&format!("Failed to install {}", name));
                if let Some(line) = last_line(&result.stderr) {
                    ui.show_hint(line);
                }
                tracing::warn!(package = name, code = ?result.exit_code, "install failed");
                PackageStatus::InstallFailed
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to install {}", name));
                ui.show_hint(&e.to_string());
                tracing::warn!(package = name, error = %e, "installer did not start");
                PackageStatus::InstallFailed
            }
        }
    }

    fn summarize(
        &self,
        packages: &[PackageSpec],
        report: &DependencyReport,
        ui: &mut dyn UserInterface,
    ) {
        let failed = report.failed();

        ui.message("");
        if failed.is_empty() {
            ui.success("All dependencies are installed");
            return;
        }

        let label = if self.options.install_missing {
            "Failed to install packages"
        } else {
            "Missing packages"
        };
        ui.error(&format!("{}: {}", label, failed.join(", ")));
        ui.message("Please install them manually using:");
        for package in packages
            .iter()
            .filter(|p| failed.contains(&p.display_name))
        {
            ui.message(&format!("   {}", self.manager.manual_install_command(package)));
        }
    }
}

/// Last non-empty line of installer output.
fn last_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).rfind(|l| !l.is_empty())
}
