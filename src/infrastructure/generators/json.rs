//! JSON report: metadata, metrics and graph

use crate::domain::entities::Economy;
use crate::domain::ports::{Clock, Generator, GeneratorError};
use crate::domain::services::ReportAssembler;
use crate::domain::value_objects::OutputFormat;

pub struct JsonGenerator<C: Clock> {
    assembler: ReportAssembler<C>,
}

impl<C: Clock> JsonGenerator<C> {
    pub fn new(assembler: ReportAssembler<C>) -> Self {
        Self { assembler }
    }
}

impl<C: Clock> Generator for JsonGenerator<C> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    /// Pretty-printed with two-space indentation
    fn generate(&self, economy: &Economy) -> Result<String, GeneratorError> {
        let report = self.assembler.assemble(economy);
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
