//! Metrics record produced by the aggregator
//!
//! Field names serialize to the camelCase keys consumed by downstream
//! renderers. Keyed groups use `BTreeMap` so key order is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FacilityType;

/// Facility id → goal id → compliant?
pub type GoalComplianceByFacility = BTreeMap<String, BTreeMap<String, bool>>;

/// Year ("YYYY") → count
pub type YearSeries = BTreeMap<String, usize>;

/// Every aggregation group computed from one economy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub counts: CountsMetrics,
    pub lifecycle: LifecycleMetrics,
    pub aggregates: AggregatesMetrics,
    pub by_facility: BTreeMap<String, FacilityMetrics>,
    pub by_retailer: BTreeMap<String, RetailerMetrics>,
    pub by_product_type: BTreeMap<String, ProductTypeMetrics>,
    pub by_consumer: BTreeMap<String, ConsumerMetrics>,
    pub by_manufacturer: BTreeMap<String, ManufacturerMetrics>,
    pub time_series: TimeSeriesMetrics,
    pub goal_compliance_by_facility: GoalComplianceByFacility,
    pub shipment_metrics: ShipmentMetrics,
}

/// avg (1 dp) / min / max over day-gap samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NumericRange {
    pub avg: f64,
    pub min: u64,
    pub max: u64,
}

/// Breakdown of facilities or processes by circular kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KindBreakdown {
    pub total: usize,
    pub recycle: usize,
    pub repair: usize,
    pub refurbish: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShipmentCounts {
    pub total: usize,
    pub delivered: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountsMetrics {
    pub components: usize,
    pub products: usize,
    pub consumers: usize,
    pub manufacturers: usize,
    pub retailers: usize,
    pub sustainability_goals: usize,
    pub orders: usize,
    pub returns: usize,
    pub facilities: KindBreakdown,
    pub circular_processes: KindBreakdown,
    pub shipments: ShipmentCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleMetrics {
    /// returns / orders, 2 dp
    pub product_return_rate: f64,
    pub order_to_return_days: NumericRange,
    pub assembly_to_order_days: NumericRange,
    pub assembly_to_return_days: NumericRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregatesMetrics {
    #[serde(rename = "energySavedKWh")]
    pub energy_saved_kwh: f64,
    pub water_saved_l: f64,
    pub co2_emission: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityMetrics {
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    #[serde(rename = "energySavedKWh")]
    pub energy_saved_kwh: f64,
    pub water_saved_l: f64,
    pub co2_emission: f64,
    pub process_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerMetrics {
    pub orders: usize,
    pub returns: usize,
    /// returns / orders, 2 dp
    pub returned_product_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeMetrics {
    pub total_products: usize,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_component_count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerMetrics {
    pub orders: usize,
    pub returns: usize,
    /// returns / orders, 2 dp
    pub return_rate: f64,
    pub distinct_products_ordered: usize,
    pub distinct_retailers_used: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerMetrics {
    pub component_count: usize,
    pub components_assembled: usize,
    pub components_ready: usize,
    pub components_in_circular_process: usize,
    pub components_recycled: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesMetrics {
    pub products_assembled_per_year: YearSeries,
    pub orders_per_year: YearSeries,
    pub shipments_per_year: YearSeries,
    pub delivered_shipments_per_year: YearSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentMetrics {
    /// delivered / total, 4 dp
    pub delivered_ratio: f64,
    pub by_destination: BTreeMap<String, DestinationShipmentStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DestinationShipmentStats {
    pub shipments: usize,
    pub delivered_shipments: usize,
    pub total_co2_emission: f64,
}
