//! Entities of the circular-economy model
//!
//! Plain data: every cross-entity link is an [`EntityRef`] into the owning
//! [`Economy`](super::Economy).

use crate::domain::value_objects::{
    ActorKind, Comparator, ComponentState, FacilityType, ModelDate, ProcessKind,
};

use super::EntityRef;

/// Manufacturer, retailer or consumer
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: String,
    pub kind: ActorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SustainabilityGoal {
    pub id: String,
    pub description: String,
    pub standard: f64,
    pub comparator: Comparator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: String,
    pub facility_type: FacilityType,
    /// Explicit facility–goal associations, in declaration order
    pub goals: Vec<EntityRef<SustainabilityGoal>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    /// Product type name; several instances may share it
    pub name: String,
    pub assembly_date: ModelDate,
    pub price: f64,
    pub retailer: EntityRef<Actor>,
    /// Components whose owning product is this one
    pub components: Vec<EntityRef<Component>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub state: ComponentState,
    pub recycled: bool,
    pub manufacturer: EntityRef<Actor>,
    pub product: Option<EntityRef<Product>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub consumer: EntityRef<Actor>,
    pub product: EntityRef<Product>,
    pub date: ModelDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub id: String,
    pub consumer: EntityRef<Actor>,
    pub order: EntityRef<Order>,
    pub reason: Option<String>,
    pub date: ModelDate,
    pub processes: Vec<EntityRef<CircularProcess>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircularProcess {
    pub id: String,
    pub kind: ProcessKind,
    pub facility: EntityRef<Facility>,
    pub energy_saved_kwh: f64,
    pub water_saved_l: f64,
    /// Only populated for `RECYCLE` processes
    pub recycled_components: Vec<EntityRef<Component>>,
    pub shipments: Vec<EntityRef<Shipment>>,
    /// Return that triggered this process
    pub origin: EntityRef<Return>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub id: String,
    pub delivered: bool,
    pub delivery_date: ModelDate,
    pub co2_emission: f64,
    pub destination: EntityRef<Actor>,
    pub process: EntityRef<CircularProcess>,
}
