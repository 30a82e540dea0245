//! Report - the composite artifact handed to the JSON generator

use serde::{Deserialize, Serialize};

use super::{Graph, Metrics};

/// Provenance of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub economy_name: String,
    /// ISO 8601 UTC with millisecond precision
    pub generated_at: String,
    pub generator: String,
    pub schema_version: String,
}

/// Metadata, metrics and graph for one economy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularEconomyReport {
    pub metadata: Metadata,
    pub metrics: Metrics,
    pub graph: Graph,
}
