//! Domain Entities
//!
//! - `Economy` - one resolved circular-economy model (entity arenas)
//! - `Metrics` - everything the aggregator derives from an economy
//! - `Graph` - generic node/edge projection of an economy
//! - `CircularEconomyReport` - metadata + metrics + graph

mod economy;
mod entity_ref;
#[cfg(test)]
pub(crate) mod fixtures;
mod graph;
mod metrics;
mod model;
mod report;

pub use economy::{Economy, EconomyBuilder};
pub use entity_ref::EntityRef;
pub use graph::{
    ComponentAttributes, EdgeType, FacilityAttributes, GoalAttributes, Graph, GraphEdge,
    GraphNode, NodeAttributes, NodeType, OrderAttributes, ProcessAttributes, ProductAttributes,
    ReturnAttributes, ShipmentAttributes,
};
pub use metrics::{
    AggregatesMetrics, ConsumerMetrics, CountsMetrics, DestinationShipmentStats,
    FacilityMetrics, GoalComplianceByFacility, KindBreakdown, LifecycleMetrics,
    ManufacturerMetrics, Metrics, NumericRange, ProductTypeMetrics, RetailerMetrics,
    ShipmentCounts, ShipmentMetrics, TimeSeriesMetrics, YearSeries,
};
pub use model::{
    Actor, CircularProcess, Component, Facility, Order, Product, Return, Shipment,
    SustainabilityGoal,
};
pub use report::{CircularEconomyReport, Metadata};
