//! Configuration module for CEML
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CEML_*)
//! 3. Explicit `--config` file, or `ceml.toml` beside the model
//! 4. User config (~/.config/ceml/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{ComplianceConfig, Config, MetadataConfig, OutputConfig, Verbosity};
