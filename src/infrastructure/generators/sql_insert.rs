//! INSERT statements for every row of a model
//!
//! Rows are emitted table by table in schema order, so foreign keys always
//! point at rows inserted earlier.

use crate::domain::entities::Economy;
use crate::domain::ports::{Generator, GeneratorError};
use crate::domain::value_objects::{ActorKind, OutputFormat};

use super::sql_schema::TableId;

/// One SQL literal
#[derive(Debug, Clone, PartialEq)]
enum SqlValue<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Null,
}

impl SqlValue<'_> {
    fn render(&self) -> String {
        match self {
            SqlValue::Text(text) => format!("'{}'", text.replace('\'', "''")),
            SqlValue::Number(value) if value.is_finite() => value.to_string(),
            // SQL has no NaN or infinity literal
            SqlValue::Number(_) => "NULL".to_string(),
            SqlValue::Bool(true) => "TRUE".to_string(),
            SqlValue::Bool(false) => "FALSE".to_string(),
            SqlValue::Null => "NULL".to_string(),
        }
    }
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(text: &'a str) -> Self {
        SqlValue::Text(text)
    }
}

impl<'a> From<&'a String> for SqlValue<'a> {
    fn from(text: &'a String) -> Self {
        SqlValue::Text(text)
    }
}

impl From<f64> for SqlValue<'_> {
    fn from(value: f64) -> Self {
        SqlValue::Number(value)
    }
}

impl From<bool> for SqlValue<'_> {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl<'a, T: Into<SqlValue<'a>>> From<Option<T>> for SqlValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// Rows of one table rendered as statements
struct TableRows {
    table: TableId,
    columns: String,
    statements: Vec<String>,
}

impl TableRows {
    fn new(table: TableId) -> Self {
        Self {
            table,
            columns: table.definition().column_names().join(", "),
            statements: Vec::new(),
        }
    }

    fn row(&mut self, values: &[SqlValue<'_>]) {
        let values: Vec<String> = values.iter().map(SqlValue::render).collect();
        self.statements.push(format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table.name(),
            self.columns,
            values.join(", ")
        ));
    }
}

fn rows(economy: &Economy, table: TableId) -> TableRows {
    let mut out = TableRows::new(table);

    match table {
        TableId::Actors => {
            for actor in economy.actors() {
                out.row(&[(&actor.id).into(), actor.kind.as_str().into()]);
            }
        }
        TableId::Manufacturers => role_rows(&mut out, economy, ActorKind::Manufacturer),
        TableId::Retailers => role_rows(&mut out, economy, ActorKind::Retailer),
        TableId::Consumers => role_rows(&mut out, economy, ActorKind::Consumer),
        TableId::SustainabilityGoals => {
            for goal in economy.goals() {
                out.row(&[
                    (&goal.id).into(),
                    (&goal.description).into(),
                    goal.standard.into(),
                    goal.comparator.as_str().into(),
                ]);
            }
        }
        TableId::Facilities => {
            for facility in economy.facilities() {
                out.row(&[(&facility.id).into(), facility.facility_type.as_str().into()]);
            }
        }
        TableId::FacilityGoals => {
            for facility in economy.facilities() {
                for goal in &facility.goals {
                    out.row(&[(&facility.id).into(), (&economy.goal(*goal).id).into()]);
                }
            }
        }
        TableId::Products => {
            for product in economy.products() {
                out.row(&[
                    (&product.id).into(),
                    (&product.name).into(),
                    product.assembly_date.as_str().into(),
                    product.price.into(),
                    (&economy.actor(product.retailer).id).into(),
                ]);
            }
        }
        TableId::Components => {
            for component in economy.components() {
                let product = component.product.map(|p| economy.product(p).id.as_str());
                out.row(&[
                    (&component.id).into(),
                    (&component.name).into(),
                    component.state.as_str().into(),
                    component.recycled.into(),
                    (&economy.actor(component.manufacturer).id).into(),
                    product.into(),
                ]);
            }
        }
        TableId::Orders => {
            for order in economy.orders() {
                out.row(&[
                    (&order.id).into(),
                    (&economy.actor(order.consumer).id).into(),
                    (&economy.product(order.product).id).into(),
                    order.date.as_str().into(),
                ]);
            }
        }
        TableId::Returns => {
            for ret in economy.returns() {
                out.row(&[
                    (&ret.id).into(),
                    (&economy.actor(ret.consumer).id).into(),
                    (&economy.order(ret.order).id).into(),
                    ret.date.as_str().into(),
                    ret.reason.as_deref().into(),
                ]);
            }
        }
        TableId::CircularProcesses => {
            for process in economy.processes() {
                out.row(&[
                    (&process.id).into(),
                    (&economy.product_return(process.origin).id).into(),
                    process.kind.as_str().into(),
                    (&economy.facility(process.facility).id).into(),
                    process.energy_saved_kwh.into(),
                    process.water_saved_l.into(),
                ]);
            }
        }
        TableId::RecycleProcessComponents => {
            for process in economy.processes() {
                for component in &process.recycled_components {
                    out.row(&[
                        (&process.id).into(),
                        (&economy.component(*component).id).into(),
                    ]);
                }
            }
        }
        TableId::Shipments => {
            for shipment in economy.shipments() {
                out.row(&[
                    (&shipment.id).into(),
                    (&economy.process(shipment.process).id).into(),
                    shipment.delivered.into(),
                    shipment.delivery_date.as_str().into(),
                    shipment.co2_emission.into(),
                    (&economy.actor(shipment.destination).id).into(),
                ]);
            }
        }
    }

    out
}

fn role_rows(out: &mut TableRows, economy: &Economy, kind: ActorKind) {
    for actor in economy.actors_of_kind(kind) {
        out.row(&[(&actor.id).into()]);
    }
}

/// All inserts; one block per non-empty table, blocks separated by a blank line
pub fn inserts(economy: &Economy) -> String {
    TableId::ALL
        .iter()
        .map(|table| rows(economy, *table))
        .filter(|rows| !rows.statements.is_empty())
        .map(|rows| rows.statements.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlInsertGenerator;

impl Generator for SqlInsertGenerator {
    fn format(&self) -> OutputFormat {
        OutputFormat::SqlInsert
    }

    fn generate(&self, economy: &Economy) -> Result<String, GeneratorError> {
        Ok(inserts(economy))
    }
}
