//! Interpreter, package, and launcher checks.
//!
//! # Modules
//!
//! - [`python`] - Interpreter version gate
//! - [`packages`] - The package table and the pip driver
//! - [`checker`] - Probe-then-install loop over the package table
//! - [`status`] - Per-package results and the stage report
//! - [`launcher`] - Web-UI launcher smoke test

pub mod checker;
pub mod launcher;
pub mod packages;
pub mod python;
pub mod status;

pub use checker::{CheckOptions, DependencyChecker};
pub use launcher::{probe_launcher, report_probe, LauncherCommand, ProbeOutcome};
pub use packages::{PackageManager, PackageSpec, Pip, REQUIRED_PACKAGES};
pub use python::{check_python_version, Interpreter, PythonVersion, SystemPython};
pub use status::{CheckResult, DependencyReport, PackageStatus};
