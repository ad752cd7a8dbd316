//! Setup pipeline orchestration.

pub mod pipeline;

pub use pipeline::{PipelineReport, SetupPipeline, API_KEYS_GUIDE, COMPLETE_TITLE, SETUP_TITLE};
