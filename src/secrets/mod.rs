//! Credential checks and the secrets template.
//!
//! - [`EnvVarSpec`] / [`REQUIRED_ENV_VARS`] - The credentials the application reads
//! - [`EnvSnapshot`] - Injected view of the environment
//! - [`scan_credentials`] - Present / missing check with masked previews
//! - [`create_env_template`] - Writes `.env.template`
//!
//! # Example
//!
//! ```
//! use ragsetup::secrets::{scan_credentials, EnvSnapshot, REQUIRED_ENV_VARS};
//!
//! let env = EnvSnapshot::from_pairs([("GOOGLE_API_KEY", "AIzaSyD-0123456789ab")]);
//! let checks = scan_credentials(REQUIRED_ENV_VARS, &env);
//!
//! assert_eq!(checks[0].line(), "Google AI API Key: AIzaSyD-...");
//! assert_eq!(checks[1].line(), "Qdrant API Key: Not set");
//! ```

pub mod credentials;
pub mod mask;
pub mod template;

pub use credentials::{
    layer_env_file, report_credentials, scan_credentials, CredentialCheck, CredentialStatus,
    EnvSnapshot, EnvVarSpec, REQUIRED_ENV_VARS,
};
pub use mask::masked_preview;
pub use template::{create_env_template, write_env_template, ENV_TEMPLATE};
