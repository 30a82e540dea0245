//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (local disk, atomic writes)
//! - `loader/` - Model document loading and reference resolution
//! - `generators/` - One generator per output format, plus their registry
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod fs;
pub mod generators;
pub mod loader;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use generators::GeneratorRegistry;
pub use loader::{parse_economy, DocumentFormat, FsModelLoader};
