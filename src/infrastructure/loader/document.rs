//! Serialized shape of a model document
//!
//! References between entities are plain identity strings here; the
//! resolver turns them into typed references. Dates are strings, or native
//! date/date-time values in TOML documents.

use serde::{Deserialize, Deserializer};

use crate::domain::value_objects::{
    ActorKind, Comparator, ComponentState, FacilityType, ModelDate, ProcessKind,
};

/// Date as written: quoted text, or a TOML date/date-time literal
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Toml(toml::value::Datetime),
}

fn model_date<'de, D>(deserializer: D) -> Result<ModelDate, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(text) => ModelDate::new(text),
        RawDate::Toml(datetime) => ModelDate::new(datetime.to_string()),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EconomyDocument {
    pub name: String,
    #[serde(default)]
    pub actors: Vec<ActorDoc>,
    #[serde(default)]
    pub goals: Vec<GoalDoc>,
    #[serde(default)]
    pub facilities: Vec<FacilityDoc>,
    #[serde(default)]
    pub products: Vec<ProductDoc>,
    #[serde(default)]
    pub components: Vec<ComponentDoc>,
    #[serde(default)]
    pub orders: Vec<OrderDoc>,
    #[serde(default)]
    pub returns: Vec<ReturnDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorDoc {
    pub id: String,
    pub kind: ActorKind,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalDoc {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub standard: f64,
    pub comparator: Comparator,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacilityDoc {
    pub id: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductDoc {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "model_date")]
    pub assembly_date: ModelDate,
    pub price: f64,
    pub retailer: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDoc {
    pub id: String,
    pub name: String,
    pub state: ComponentState,
    #[serde(default)]
    pub recycled: bool,
    pub manufacturer: String,
    #[serde(default)]
    pub product: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderDoc {
    pub id: String,
    pub consumer: String,
    pub product: String,
    #[serde(deserialize_with = "model_date")]
    pub date: ModelDate,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReturnDoc {
    pub id: String,
    pub consumer: String,
    pub order: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(deserialize_with = "model_date")]
    pub date: ModelDate,
    #[serde(default)]
    pub processes: Vec<ProcessDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProcessDoc {
    pub id: String,
    pub kind: ProcessKind,
    pub facility: String,
    #[serde(rename = "energySavedKWh", default)]
    pub energy_saved_kwh: f64,
    #[serde(default)]
    pub water_saved_l: f64,
    #[serde(default)]
    pub recycled_components: Vec<String>,
    #[serde(default)]
    pub shipments: Vec<ShipmentDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShipmentDoc {
    pub id: String,
    pub delivered: bool,
    #[serde(deserialize_with = "model_date")]
    pub delivery_date: ModelDate,
    #[serde(default)]
    pub co2_emission: f64,
    pub destination: String,
}
