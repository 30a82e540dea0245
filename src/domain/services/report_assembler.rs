//! Report Assembler
//!
//! Combines metadata, metrics and graph into a [`CircularEconomyReport`].
//! The two engines only read the economy, so they run on separate threads.

use std::thread;

use chrono::SecondsFormat;

use crate::domain::entities::{CircularEconomyReport, Economy, Metadata};
use crate::domain::ports::Clock;

use super::{GraphProjector, MetricsAggregator};

/// Identity stamped into report metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub name: String,
    pub schema_version: String,
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self {
            name: "ceml-cli".to_string(),
            schema_version: "1.0".to_string(),
        }
    }
}

pub struct ReportAssembler<C: Clock> {
    clock: C,
    info: GeneratorInfo,
    aggregator: MetricsAggregator,
    projector: GraphProjector,
}

impl<C: Clock> ReportAssembler<C> {
    pub fn new(clock: C, info: GeneratorInfo, aggregator: MetricsAggregator) -> Self {
        Self {
            clock,
            info,
            aggregator,
            projector: GraphProjector::new(),
        }
    }

    pub fn metadata(&self, economy: &Economy) -> Metadata {
        Metadata {
            economy_name: economy.name().to_string(),
            generated_at: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            generator: self.info.name.clone(),
            schema_version: self.info.schema_version.clone(),
        }
    }

    pub fn assemble(&self, economy: &Economy) -> CircularEconomyReport {
        let metadata = self.metadata(economy);
        let (metrics, graph) = thread::scope(|scope| {
            let graph = scope.spawn(|| self.projector.project(economy));
            let metrics = self.aggregator.aggregate(economy);
            match graph.join() {
                Ok(graph) => (metrics, graph),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        });

        CircularEconomyReport {
            metadata,
            metrics,
            graph,
        }
    }
}
