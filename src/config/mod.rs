//! Configuration loading.
//!
//! ragsetup works with no configuration at all. An optional
//! `.ragsetup/config.yml` can point it at a different interpreter, launcher,
//! or template path, and command-line flags override both.
//!
//! # Example
//!
//! ```
//! use ragsetup::config::{ConfigOverrides, SetupConfig};
//!
//! let mut config = SetupConfig::default();
//! config.apply(&ConfigOverrides {
//!     timeout_secs: Some(30),
//!     ..Default::default()
//! });
//! assert_eq!(config.launcher.timeout_secs, 30);
//! assert_eq!(config.min_python.to_string(), "3.8");
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;

pub use env_file::EnvFileParser;
pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{
    ConfigOverrides, LauncherConfig, MinimumVersion, ProbeStrategy, SetupConfig,
    DEFAULT_LAUNCHER_TIMEOUT_SECS, DEFAULT_TEMPLATE_PATH,
};
