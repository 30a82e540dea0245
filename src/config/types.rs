//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{GeneratorInfo, MetricsAggregator};
use crate::domain::value_objects::ComplianceMetric;
use crate::error::CemlResult;

use super::loader::{self, ConfigWarning};

/// Report metadata configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_generator")]
    pub generator: String,

    #[serde(default = "default_schema_version")]
    pub schema_version: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            schema_version: default_schema_version(),
        }
    }
}

fn default_generator() -> String {
    "ceml-cli".to_string()
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// Goal compliance configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComplianceConfig {
    #[serde(default)]
    pub metric: ComplianceMetric,
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a level name; unknown names fall back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Raise the level by `steps` (`-v` occurrences), saturating at `Debug`
    pub fn raised(self, steps: u8) -> Self {
        (0..steps).fold(self, |level, _| match level {
            Verbosity::Quiet | Verbosity::Normal => Verbosity::Verbose,
            Verbosity::Verbose | Verbosity::Debug => Verbosity::Debug,
        })
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub compliance: ComplianceConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CemlResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CemlResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `ceml.toml` in `model_dir`, user config, or defaults
    pub fn load_or_default(model_dir: Option<&Path>) -> CemlResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(model_dir)
    }

    /// Apply environment variable overrides (CEML_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Identity stamped into report metadata
    pub fn generator_info(&self) -> GeneratorInfo {
        GeneratorInfo {
            name: self.metadata.generator.clone(),
            schema_version: self.metadata.schema_version.clone(),
        }
    }

    pub fn metrics_aggregator(&self) -> MetricsAggregator {
        MetricsAggregator::new(self.compliance.metric)
    }
}
