//! Secrets template writer.
//!
//! The template carries placeholder values only. It is rewritten in full
//! on every run, so the file on disk is always exactly [`ENV_TEMPLATE`].

use std::path::Path;

use crate::error::Result;
use crate::ui::UserInterface;

/// Contents of the generated `.env.template`.
pub const ENV_TEMPLATE: &str = "\
# API Keys for Agentic RAG Application
# Copy this file to .env and fill in your actual API keys

# Required: Google AI API Key
# Get from: https://aistudio.google.com/
GOOGLE_API_KEY=your_google_api_key_here

# Required: Qdrant Vector Database
# Get from: https://cloud.qdrant.io/
QDRANT_API_KEY=your_qdrant_api_key_here
QDRANT_URL=https://your-cluster.cloud.qdrant.io:6333

# Optional: Exa AI for web search
# Get from: https://exa.ai/
EXA_API_KEY=your_exa_api_key_here
";

/// Write the template to `path`, replacing any existing file.
pub fn write_env_template(path: &Path) -> Result<()> {
    std::fs::write(path, ENV_TEMPLATE)?;
    tracing::info!(path = %path.display(), "wrote env template");
    Ok(())
}

/// Write the template and print the outcome. Returns whether it was written.
pub fn create_env_template(path: &Path, ui: &mut dyn UserInterface) -> bool {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match write_env_template(path) {
        Ok(()) => {
            ui.success(&format!("Created {} file", file));
            ui.show_hint("Copy this to .env and fill in your API keys");
            true
        }
        Err(e) => {
            ui.error(&format!("Failed to create {}: {}", file, e));
            false
        }
    }
}
