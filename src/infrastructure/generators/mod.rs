//! Output Generators
//!
//! These implement the Generator port, one per output format, and the
//! registry the generate use case selects them from.

mod json;
mod plantuml;
mod sql;
mod sql_insert;
mod sql_schema;

pub use json::JsonGenerator;
pub use plantuml::PlantUmlGenerator;
pub use sql::SqlGenerator;
pub use sql_insert::SqlInsertGenerator;
pub use sql_schema::{schema as sql_schema, SqlSchemaGenerator};

use std::collections::BTreeMap;

use crate::domain::ports::{Clock, Generator, GeneratorError, SystemClock};
use crate::domain::services::{GeneratorInfo, MetricsAggregator, ReportAssembler};
use crate::domain::value_objects::OutputFormat;

/// Generators keyed by the format they produce
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<OutputFormat, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Registry without any generator
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every built-in generator, stamping reports with the wall clock
    pub fn with_defaults(info: GeneratorInfo, aggregator: MetricsAggregator) -> Self {
        Self::with_clock(SystemClock, info, aggregator)
    }

    /// Every built-in generator, stamping reports with `clock`
    pub fn with_clock<C: Clock + 'static>(
        clock: C,
        info: GeneratorInfo,
        aggregator: MetricsAggregator,
    ) -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(JsonGenerator::new(ReportAssembler::new(
            clock, info, aggregator,
        ))));
        registry.register(Box::new(SqlGenerator));
        registry.register(Box::new(SqlSchemaGenerator));
        registry.register(Box::new(SqlInsertGenerator));
        registry.register(Box::new(PlantUmlGenerator));
        registry
    }

    /// Add or replace the generator for its format
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.format(), generator);
    }

    /// Generator for `format`, or `NotImplemented` when none is registered
    pub fn get(&self, format: OutputFormat) -> Result<&dyn Generator, GeneratorError> {
        self.generators
            .get(&format)
            .map(|generator| generator.as_ref())
            .ok_or(GeneratorError::NotImplemented { format })
    }

    pub fn formats(&self) -> impl Iterator<Item = OutputFormat> + '_ {
        self.generators.keys().copied()
    }
}
