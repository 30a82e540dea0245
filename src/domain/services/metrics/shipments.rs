//! Delivery performance and per-destination shipment statistics

use std::collections::BTreeMap;

use crate::domain::entities::{DestinationShipmentStats, Economy, Shipment, ShipmentMetrics};
use crate::domain::services::grouping::{group_by, Reducer};
use crate::domain::services::numeric::{ratio, DELIVERED_RATIO_DECIMALS};

impl<'a> Reducer<&'a Shipment> for DestinationShipmentStats {
    type Output = DestinationShipmentStats;

    fn push(&mut self, shipment: &'a Shipment) {
        self.shipments += 1;
        if shipment.delivered {
            self.delivered_shipments += 1;
        }
        self.total_co2_emission += shipment.co2_emission;
    }

    fn finish(self) -> DestinationShipmentStats {
        self
    }
}

pub(super) fn shipment_metrics(economy: &Economy) -> ShipmentMetrics {
    let shipments = economy.shipments();
    let delivered = shipments.iter().filter(|s| s.delivered).count();

    let by_destination: BTreeMap<String, DestinationShipmentStats> = group_by(
        shipments,
        |shipment| Some(economy.actor(shipment.destination).id.clone()),
        DestinationShipmentStats::default,
    );

    ShipmentMetrics {
        delivered_ratio: ratio(delivered, shipments.len(), DELIVERED_RATIO_DECIMALS),
        by_destination,
    }
}
