//! Event Sink Implementations
//!
//! Concrete implementations of GenerateEventSink:
//! - JsonEventSink: NDJSON output for CI/automation

mod json;

pub use json::JsonEventSink;
