//! Scenario: shipment delivery
//!
//! Journey: returned goods are shipped back to actors; one shipment is
//! still on its way.
//!
//! Success Criteria:
//! - three of four delivered is a 0.75 ratio
//! - per-destination stats add up to the totals

use ceml::MetricsAggregator;

use crate::common::*;

#[test]
fn scenario_three_of_four_shipments_delivered() {
    let metrics = MetricsAggregator::default().aggregate(&sample_economy());

    assert_eq!(metrics.counts.shipments.total, 4);
    assert_eq!(metrics.counts.shipments.delivered, 3);
    assert_eq!(metrics.counts.shipments.pending, 1);
    assert_eq!(metrics.shipment_metrics.delivered_ratio, 0.75);
}

#[test]
fn scenario_destinations_partition_the_shipments() {
    let metrics = MetricsAggregator::default().aggregate(&sample_economy());
    let by_destination = &metrics.shipment_metrics.by_destination;

    assert_eq!(
        by_destination.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["alice", "maker", "shop-a"]
    );

    let maker = &by_destination["maker"];
    assert_eq!(maker.shipments, 2);
    assert_eq!(maker.delivered_shipments, 2);
    assert_eq!(maker.total_co2_emission, 3.0);

    let shop = &by_destination["shop-a"];
    assert_eq!(shop.shipments, 1);
    assert_eq!(shop.delivered_shipments, 0);

    let total: usize = by_destination.values().map(|d| d.shipments).sum();
    assert_eq!(total, metrics.counts.shipments.total);
}

#[test]
fn scenario_shipments_per_year() {
    let metrics = MetricsAggregator::default().aggregate(&sample_economy());
    let series = &metrics.time_series;

    assert_eq!(series.shipments_per_year["2023"], 3);
    assert_eq!(series.shipments_per_year["2024"], 1);
    assert_eq!(series.delivered_shipments_per_year["2023"], 2);
    assert_eq!(series.delivered_shipments_per_year["2024"], 1);
}
