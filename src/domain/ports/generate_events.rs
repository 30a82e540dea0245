//! Generate Event Port
//!
//! Observable progress of a `generate` run, for NDJSON streams and tests.

use std::path::PathBuf;

use crate::domain::value_objects::OutputFormat;

/// Event emitted during a generate run
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Generation started
    Started {
        source: PathBuf,
        destination: PathBuf,
        format: OutputFormat,
    },

    /// Source model loaded and resolved
    ModelLoaded {
        economy_name: String,
        entity_count: usize,
    },

    /// Artifact text rendered
    Generated { format: OutputFormat, bytes: usize },

    /// Artifact written to its destination
    Written { destination: PathBuf, bytes: usize },
}

/// Trait for receiving generate events
///
/// Implementations:
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait GenerateEventSink: Send + Sync {
    fn on_event(&self, event: GenerateEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}
