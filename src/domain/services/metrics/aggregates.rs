//! Economy-wide sustainability totals

use crate::domain::entities::{AggregatesMetrics, Economy};

pub(super) fn aggregates(economy: &Economy) -> AggregatesMetrics {
    AggregatesMetrics {
        energy_saved_kwh: economy.processes().iter().map(|p| p.energy_saved_kwh).sum(),
        water_saved_l: economy.processes().iter().map(|p| p.water_saved_l).sum(),
        co2_emission: economy.shipments().iter().map(|s| s.co2_emission).sum(),
    }
}
