//! Generate Result

use std::path::PathBuf;

use crate::domain::value_objects::OutputFormat;

/// Result of a successful generate run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// File that was written
    pub destination: PathBuf,
    pub format: OutputFormat,
    pub bytes_written: usize,
    /// Entities in the loaded model
    pub entity_count: usize,
}
