//! ragsetup - Environment bootstrap for the Agentic RAG application.
//!
//! ragsetup checks that a project's Python environment can run the RAG chat
//! application: interpreter version, required packages, the Streamlit
//! launcher, and API key variables. It also writes a `.env.template`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration and `.env` parsing
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Version gate, package checks, launcher probe
//! - [`runner`] - The five-stage setup pipeline
//! - [`secrets`] - Credential scan and the secrets template
//! - [`shell`] - Subprocess execution and platform helpers
//! - [`ui`] - Terminal output, spinners, and the test UI
//!
//! # Example
//!
//! ```
//! use ragsetup::requirements::PythonVersion;
//! use ragsetup::config::MinimumVersion;
//!
//! let version = PythonVersion::parse("Python 3.11.7").unwrap();
//! assert!(version.is_compatible(MinimumVersion::default()));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod secrets;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
