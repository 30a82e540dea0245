//! Relational schema (DDL) for circular-economy models
//!
//! The schema does not depend on the model: every economy maps onto the
//! same fourteen tables.

use crate::domain::entities::Economy;
use crate::domain::ports::{Generator, GeneratorError};
use crate::domain::value_objects::OutputFormat;

mod sql_type {
    pub const ID: &str = "VARCHAR(64)";
    pub const NAME: &str = "VARCHAR(255)";
    pub const ENUM_SHORT: &str = "VARCHAR(8)";
    pub const ENUM_MEDIUM: &str = "VARCHAR(32)";
    pub const TEXT: &str = "TEXT";
    pub const DATE: &str = "DATE";
    pub const BOOLEAN: &str = "BOOLEAN";
    pub const NUMERIC: &str = "NUMERIC(10,2)";
}

const ACTOR_KINDS: &[&str] = &["RETAILER", "MANUFACTURER", "CONSUMER"];
const COMPONENT_STATES: &[&str] = &["ASSEMBLED", "IN_CIRCULAR_PROCESS", "READY"];
const FACILITY_TYPES: &[&str] = &["RECYCLE", "REFURBISH", "REPAIR"];
const PROCESS_KINDS: &[&str] = &["RECYCLE", "REPAIR", "REFURBISH"];
const COMPARATORS: &[&str] = &["MIN", "MAX"];

/// Tables in creation order; every table only references earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    Actors,
    Manufacturers,
    Retailers,
    Consumers,
    SustainabilityGoals,
    Facilities,
    FacilityGoals,
    Products,
    Components,
    Orders,
    Returns,
    CircularProcesses,
    RecycleProcessComponents,
    Shipments,
}

impl TableId {
    pub const ALL: [TableId; 14] = [
        TableId::Actors,
        TableId::Manufacturers,
        TableId::Retailers,
        TableId::Consumers,
        TableId::SustainabilityGoals,
        TableId::Facilities,
        TableId::FacilityGoals,
        TableId::Products,
        TableId::Components,
        TableId::Orders,
        TableId::Returns,
        TableId::CircularProcesses,
        TableId::RecycleProcessComponents,
        TableId::Shipments,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableId::Actors => "actors",
            TableId::Manufacturers => "manufacturers",
            TableId::Retailers => "retailers",
            TableId::Consumers => "consumers",
            TableId::SustainabilityGoals => "sustainability_goals",
            TableId::Facilities => "facilities",
            TableId::FacilityGoals => "facility_goals",
            TableId::Products => "products",
            TableId::Components => "components",
            TableId::Orders => "orders",
            TableId::Returns => "returns",
            TableId::CircularProcesses => "circular_processes",
            TableId::RecycleProcessComponents => "recycle_process_components",
            TableId::Shipments => "shipments",
        }
    }

    pub fn definition(self) -> Table {
        use sql_type::*;

        let actor_row = || vec![Column::new("actor_id", ID).primary_key().references("actors(id)")];

        match self {
            TableId::Actors => Table::new(self)
                .columns(vec![
                    Column::new("id", ID).primary_key(),
                    Column::new("kind", ENUM_MEDIUM).not_null(),
                ])
                .check("kind", ACTOR_KINDS),
            TableId::Manufacturers | TableId::Retailers | TableId::Consumers => {
                Table::new(self).columns(actor_row())
            }
            TableId::SustainabilityGoals => Table::new(self)
                .columns(vec![
                    Column::new("id", ID).primary_key(),
                    Column::new("description", TEXT).not_null(),
                    Column::new("standard", NUMERIC).not_null(),
                    Column::new("comparator", ENUM_SHORT).not_null(),
                ])
                .check("comparator", COMPARATORS),
            TableId::Facilities => Table::new(self)
                .columns(vec![
                    Column::new("id", ID).primary_key(),
                    Column::new("type", ENUM_MEDIUM).not_null(),
                ])
                .check("type", FACILITY_TYPES),
            TableId::FacilityGoals => Table::new(self)
                .columns(vec![
                    Column::new("facility_id", ID).not_null().references("facilities(id)"),
                    Column::new("goal_id", ID)
                        .not_null()
                        .references("sustainability_goals(id)"),
                ])
                .composite_key(&["facility_id", "goal_id"]),
            TableId::Products => Table::new(self).columns(vec![
                Column::new("id", ID).primary_key(),
                Column::new("product_name", NAME).not_null(),
                Column::new("assembly_date", DATE).not_null(),
                Column::new("price", NUMERIC).not_null(),
                Column::new("retailer_id", ID)
                    .not_null()
                    .references("retailers(actor_id)"),
            ]),
            TableId::Components => Table::new(self)
                .columns(vec![
                    Column::new("id", ID).primary_key(),
                    Column::new("component_name", NAME).not_null(),
                    Column::new("state", ENUM_MEDIUM).not_null(),
                    Column::new("recycled", BOOLEAN).not_null(),
                    Column::new("manufacturer_id", ID)
                        .not_null()
                        .references("manufacturers(actor_id)"),
                    Column::new("product_id", ID).references("products(id)"),
                ])
                .check("state", COMPONENT_STATES),
            TableId::Orders => Table::new(self).columns(vec![
                Column::new("id", ID).primary_key(),
                Column::new("consumer_id", ID)
                    .not_null()
                    .references("consumers(actor_id)"),
                Column::new("product_id", ID).not_null().references("products(id)"),
                Column::new("order_date", DATE).not_null(),
            ]),
            TableId::Returns => Table::new(self).columns(vec![
                Column::new("id", ID).primary_key(),
                Column::new("consumer_id", ID)
                    .not_null()
                    .references("consumers(actor_id)"),
                Column::new("order_id", ID).not_null().references("orders(id)"),
                Column::new("return_date", DATE).not_null(),
                Column::new("reason", TEXT),
            ]),
            TableId::CircularProcesses => Table::new(self)
                .columns(vec![
                    Column::new("id", ID).primary_key(),
                    Column::new("return_id", ID).not_null().references("returns(id)"),
                    Column::new("kind", ENUM_MEDIUM).not_null(),
                    Column::new("facility_id", ID).not_null().references("facilities(id)"),
                    Column::new("energy_saved_kwh", NUMERIC).not_null(),
                    Column::new("water_saved_l", NUMERIC).not_null(),
                ])
                .check("kind", PROCESS_KINDS),
            TableId::RecycleProcessComponents => Table::new(self)
                .columns(vec![
                    Column::new("process_id", ID)
                        .not_null()
                        .references("circular_processes(id)"),
                    Column::new("component_id", ID)
                        .not_null()
                        .references("components(id)"),
                ])
                .composite_key(&["process_id", "component_id"]),
            TableId::Shipments => Table::new(self).columns(vec![
                Column::new("id", ID).primary_key(),
                Column::new("process_id", ID)
                    .not_null()
                    .references("circular_processes(id)"),
                Column::new("delivered", BOOLEAN).not_null(),
                Column::new("delivery_date", DATE).not_null(),
                Column::new("co2_emission", NUMERIC).not_null(),
                Column::new("destination_id", ID).not_null().references("actors(id)"),
            ]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    sql_type: &'static str,
    primary_key: bool,
    not_null: bool,
    references: Option<&'static str>,
}

impl Column {
    fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self {
            name,
            sql_type,
            primary_key: false,
            not_null: false,
            references: None,
        }
    }

    fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    fn references(mut self, target: &'static str) -> Self {
        self.references = Some(target);
        self
    }

    fn render(&self) -> String {
        let mut parts = vec![self.name.to_string(), self.sql_type.to_string()];
        if self.primary_key {
            parts.push("PRIMARY KEY".to_string());
        }
        if self.not_null {
            parts.push("NOT NULL".to_string());
        }
        if let Some(target) = self.references {
            parts.push(format!("REFERENCES {target}"));
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub id: TableId,
    pub columns: Vec<Column>,
    composite_key: Option<&'static [&'static str]>,
    checks: Vec<String>,
}

impl Table {
    fn new(id: TableId) -> Self {
        Self {
            id,
            columns: Vec::new(),
            composite_key: None,
            checks: Vec::new(),
        }
    }

    fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    fn composite_key(mut self, key: &'static [&'static str]) -> Self {
        self.composite_key = Some(key);
        self
    }

    fn check(mut self, column: &str, allowed: &[&str]) -> Self {
        let quoted: Vec<String> = allowed.iter().map(|v| format!("'{v}'")).collect();
        self.checks
            .push(format!("CHECK ({column} IN ({}))", quoted.join(", ")));
        self
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn render(&self) -> String {
        let mut definitions: Vec<String> = self.columns.iter().map(Column::render).collect();
        if let Some(key) = self.composite_key {
            definitions.push(format!("PRIMARY KEY ({})", key.join(", ")));
        }
        definitions.extend(self.checks.iter().cloned());

        let body: Vec<String> = definitions.iter().map(|d| format!("    {d}")).collect();
        format!("CREATE TABLE {} (\n{}\n);", self.id.name(), body.join(",\n"))
    }
}

/// Full DDL, one `CREATE TABLE` per table separated by a blank line
pub fn schema() -> String {
    TableId::ALL
        .iter()
        .map(|table| table.definition().render())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlSchemaGenerator;

impl Generator for SqlSchemaGenerator {
    fn format(&self) -> OutputFormat {
        OutputFormat::SqlSchema
    }

    fn generate(&self, _economy: &Economy) -> Result<String, GeneratorError> {
        Ok(schema())
    }
}
