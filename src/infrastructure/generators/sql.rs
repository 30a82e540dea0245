//! Combined schema + inserts

use crate::domain::entities::Economy;
use crate::domain::ports::{Generator, GeneratorError};
use crate::domain::value_objects::OutputFormat;

use super::sql_insert::inserts;
use super::sql_schema::schema;

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlGenerator;

impl Generator for SqlGenerator {
    fn format(&self) -> OutputFormat {
        OutputFormat::Sql
    }

    fn generate(&self, economy: &Economy) -> Result<String, GeneratorError> {
        Ok(format!("{}\n\n{}", schema(), inserts(economy)))
    }
}
