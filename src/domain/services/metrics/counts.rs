//! Entity counts and the facility / process / shipment breakdowns

use crate::domain::entities::{CountsMetrics, Economy, KindBreakdown, ShipmentCounts};
use crate::domain::services::grouping::{reduce, Reducer};
use crate::domain::value_objects::{ActorKind, CircularKind};

impl Reducer<CircularKind> for KindBreakdown {
    type Output = KindBreakdown;

    fn push(&mut self, kind: CircularKind) {
        self.total += 1;
        match kind {
            CircularKind::Recycle => self.recycle += 1,
            CircularKind::Repair => self.repair += 1,
            CircularKind::Refurbish => self.refurbish += 1,
        }
    }

    fn finish(self) -> KindBreakdown {
        self
    }
}

/// Folds shipments' `delivered` flags
impl Reducer<bool> for ShipmentCounts {
    type Output = ShipmentCounts;

    fn push(&mut self, delivered: bool) {
        self.total += 1;
        if delivered {
            self.delivered += 1;
        } else {
            self.pending += 1;
        }
    }

    fn finish(self) -> ShipmentCounts {
        self
    }
}

pub(super) fn counts(economy: &Economy) -> CountsMetrics {
    let actors = |kind| economy.actors_of_kind(kind).count();

    CountsMetrics {
        components: economy.components().len(),
        products: economy.products().len(),
        consumers: actors(ActorKind::Consumer),
        manufacturers: actors(ActorKind::Manufacturer),
        retailers: actors(ActorKind::Retailer),
        sustainability_goals: economy.goals().len(),
        orders: economy.orders().len(),
        returns: economy.returns().len(),
        facilities: reduce(
            economy.facilities().iter().map(|f| f.facility_type),
            KindBreakdown::default,
        ),
        circular_processes: reduce(
            economy.processes().iter().map(|p| p.kind),
            KindBreakdown::default,
        ),
        shipments: reduce(
            economy.shipments().iter().map(|s| s.delivered),
            ShipmentCounts::default,
        ),
    }
}
