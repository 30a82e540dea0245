//! Generate Options

use std::path::PathBuf;

use crate::domain::value_objects::OutputFormat;

/// Options for the generate use case
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Model document to read
    pub source: PathBuf,
    /// File the artifact is written to
    pub destination: PathBuf,
    pub format: OutputFormat,
}

impl GenerateOptions {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        format: OutputFormat,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            format,
        }
    }
}
