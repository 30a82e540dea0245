//! Generator port - one emitter per output format
//!
//! Each generator turns an [`Economy`] into the text of one artifact. Writing
//! the text is the caller's job.

use thiserror::Error;

use crate::domain::entities::Economy;
use crate::domain::value_objects::OutputFormat;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No generator is registered for the format
    #[error("generation for format '{format}' is not implemented")]
    NotImplemented { format: OutputFormat },

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Output-format emitter
pub trait Generator: Send + Sync {
    /// Format this generator produces
    fn format(&self) -> OutputFormat;

    /// Render the artifact text for `economy`
    fn generate(&self, economy: &Economy) -> Result<String, GeneratorError>;
}
