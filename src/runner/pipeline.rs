//! The five-stage setup pipeline.
//!
//! Stages run top to bottom. Only the version gate can stop the run;
//! every later stage reports its problems and hands over to the next.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::SetupConfig;
use crate::requirements::{
    check_python_version, probe_launcher, report_probe, CheckOptions, DependencyChecker,
    DependencyReport, Interpreter, LauncherCommand, PackageManager, ProbeOutcome, PythonVersion,
    REQUIRED_PACKAGES,
};
use crate::secrets::{
    create_env_template, layer_env_file, report_credentials, scan_credentials, CredentialCheck,
    EnvSnapshot, REQUIRED_ENV_VARS,
};
use crate::ui::UserInterface;

/// Banner printed before the first stage.
pub const SETUP_TITLE: &str = "Agentic RAG Setup and Environment Check";

/// Banner printed after the last stage.
pub const COMPLETE_TITLE: &str = "Setup Complete!";

/// Guide covering how to obtain each credential.
pub const API_KEYS_GUIDE: &str = "API_KEYS_SETUP.md";

/// Everything a full run produced.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Interpreter version, when the gate passed.
    pub python: Option<PythonVersion>,
    /// Package results; `None` when the run stopped before the stage.
    pub dependencies: Option<DependencyReport>,
    /// Launcher smoke test outcome.
    pub launcher: Option<ProbeOutcome>,
    /// Credential scan results.
    pub credentials: Vec<CredentialCheck>,
    /// Whether the template file was written.
    pub template_written: bool,
    /// Whether the version gate stopped the run.
    pub aborted: bool,
    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl PipelineReport {
    /// Number of advisory problems reported by stages 2 to 5.
    pub fn advisory_count(&self) -> usize {
        let packages = self
            .dependencies
            .as_ref()
            .map_or(0, |d| d.failed().len());
        let launcher = usize::from(self.launcher.as_ref().is_some_and(|o| !o.is_working()));
        let credentials = self.credentials.iter().filter(|c| c.is_blocking()).count();
        let template = usize::from(!self.aborted && !self.template_written);
        packages + launcher + credentials + template
    }
}

/// Runs the setup stages against injected collaborators.
pub struct SetupPipeline<'a> {
    config: &'a SetupConfig,
    project_root: PathBuf,
    interpreter: &'a dyn Interpreter,
    packages: &'a dyn PackageManager,
    env: EnvSnapshot,
    check_options: CheckOptions,
}

impl<'a> SetupPipeline<'a> {
    /// Create a pipeline.
    pub fn new(
        config: &'a SetupConfig,
        project_root: &Path,
        interpreter: &'a dyn Interpreter,
        packages: &'a dyn PackageManager,
        env: EnvSnapshot,
    ) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            interpreter,
            packages,
            env,
            check_options: CheckOptions::default(),
        }
    }

    /// Set the dependency check options.
    pub fn with_check_options(mut self, options: CheckOptions) -> Self {
        self.check_options = options;
        self
    }

    /// Where the template is written.
    pub fn template_path(&self) -> PathBuf {
        self.config.template_path_in(&self.project_root)
    }

    /// Stage 1: the version gate. `None` means stop.
    pub fn check_python(&self, ui: &mut dyn UserInterface) -> Option<PythonVersion> {
        debug!(interpreter = self.interpreter.name(), "stage: version gate");
        check_python_version(self.interpreter, self.config.min_python, ui)
    }

    /// Stage 2: probe and install packages.
    pub fn check_dependencies(&self, ui: &mut dyn UserInterface) -> DependencyReport {
        debug!(install = self.check_options.install_missing, "stage: dependencies");
        DependencyChecker::new(self.packages, self.check_options).run(REQUIRED_PACKAGES, ui)
    }

    /// Stage 3: launcher smoke test.
    pub fn check_launcher(&self, ui: &mut dyn UserInterface) -> ProbeOutcome {
        let launcher = LauncherCommand::from_config(self.config);
        debug!(command = %launcher.display(), "stage: launcher probe");
        let outcome = probe_launcher(&launcher);
        report_probe(&launcher.name, &outcome, ui);
        outcome
    }

    /// Stage 4: credential scan, with the configured env file layered in.
    pub fn check_credentials(&self, ui: &mut dyn UserInterface) -> Vec<CredentialCheck> {
        debug!("stage: credentials");
        let env_file = self.config.env_file_in(&self.project_root);
        let env = layer_env_file(self.env.clone(), env_file.as_deref(), ui);
        let checks = scan_credentials(REQUIRED_ENV_VARS, &env);
        report_credentials(&checks, ui);
        checks
    }

    /// Stage 5: write the secrets template.
    pub fn write_template(&self, ui: &mut dyn UserInterface) -> bool {
        let path = self.template_path();
        debug!(path = %path.display(), "stage: template");
        create_env_template(&path, ui)
    }

    /// Run every stage with headers and the closing instructions.
    pub fn run(&self, ui: &mut dyn UserInterface) -> PipelineReport {
        let start = Instant::now();
        let mut report = PipelineReport::default();

        ui.show_header(SETUP_TITLE);

        ui.show_step(1, "Checking Python Version");
        report.python = self.check_python(ui);
        if report.python.is_none() {
            ui.message("");
            ui.error("Setup failed: Incompatible Python version");
            report.aborted = true;
            report.duration = start.elapsed();
            info!("setup aborted at version gate");
            return report;
        }

        ui.show_step(2, "Checking and Installing Dependencies");
        report.dependencies = Some(self.check_dependencies(ui));

        ui.show_step(3, &format!("Testing {}", self.config.launcher.name));
        report.launcher = Some(self.check_launcher(ui));

        ui.show_step(4, "Checking Environment Variables");
        report.credentials = self.check_credentials(ui);

        ui.show_step(5, "Creating Environment Template");
        report.template_written = self.write_template(ui);

        self.show_next_steps(ui);

        report.duration = start.elapsed();
        info!(
            advisories = report.advisory_count(),
            duration_ms = report.duration.as_millis() as u64,
            "setup finished"
        );
        report
    }

    fn show_next_steps(&self, ui: &mut dyn UserInterface) {
        let template = self
            .config
            .template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config.template_path.display().to_string());

        ui.show_header(COMPLETE_TITLE);
        ui.message("");
        ui.message("Next steps:");
        let steps = [
            format!("Copy {} to .env", template),
            "Fill in your API keys in the .env file".to_string(),
            format!(
                "See {} for detailed instructions on getting API keys",
                API_KEYS_GUIDE
            ),
            "Run the application with: streamlit run main.py".to_string(),
        ];
        for (i, step) in steps.iter().enumerate() {
            ui.message(&format!("{}. {}", i + 1, step));
        }
        ui.message("");
        ui.message(&format!("For help with API keys, see: {}", API_KEYS_GUIDE));
    }
}
