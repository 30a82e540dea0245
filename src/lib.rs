//! CEML - circular-economy model compiler
//!
//! Loads a circular-economy model (actors, products, components, orders,
//! returns, circular processes, shipments, facilities and sustainability
//! goals), computes its sustainability metrics, projects it onto a generic
//! node/edge graph and renders JSON, SQL or PlantUML artifacts.
//!
//! ## Layers
//!
//! - `domain` - entities, engines (metrics, graph, report) and ports
//! - `application` - the generate use case
//! - `infrastructure` - model loading, generators, file system, events
//! - `presentation` - CLI definition, use case wiring, rendering
//! - `config` / `logging` - ambient configuration and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{CircularEconomyReport, Economy, EconomyBuilder, Graph, Metrics};
pub use domain::services::{GraphProjector, MetricsAggregator, ReportAssembler};
pub use domain::value_objects::{ComplianceMetric, OutputFormat};
pub use error::{CemlError, CemlResult};
