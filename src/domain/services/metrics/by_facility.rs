//! Per-facility sustainability totals

use std::collections::BTreeMap;

use crate::domain::entities::{CircularProcess, Economy, EntityRef, Facility, FacilityMetrics};
use crate::domain::services::grouping::{group_by, Reducer};
use crate::domain::value_objects::ComplianceMetric;

/// Totals over the processes performed at one facility
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SustainabilityTotals {
    pub energy_saved_kwh: f64,
    pub water_saved_l: f64,
    /// Emitted by the shipments of the facility's processes
    pub co2_emission: f64,
    pub process_count: usize,
}

impl SustainabilityTotals {
    /// The aggregate a goal is judged on
    pub fn value(&self, metric: ComplianceMetric) -> f64 {
        match metric {
            ComplianceMetric::Energy => self.energy_saved_kwh,
            ComplianceMetric::Water => self.water_saved_l,
            ComplianceMetric::Co2 => self.co2_emission,
        }
    }
}

struct FacilityAccumulator<'a> {
    economy: &'a Economy,
    totals: SustainabilityTotals,
}

impl<'a> Reducer<&'a CircularProcess> for FacilityAccumulator<'a> {
    type Output = SustainabilityTotals;

    fn push(&mut self, process: &'a CircularProcess) {
        self.totals.energy_saved_kwh += process.energy_saved_kwh;
        self.totals.water_saved_l += process.water_saved_l;
        self.totals.co2_emission += self.economy.process_co2(process);
        self.totals.process_count += 1;
    }

    fn finish(self) -> SustainabilityTotals {
        self.totals
    }
}

/// Totals for every facility that performed at least one process
pub fn facility_totals(economy: &Economy) -> BTreeMap<EntityRef<Facility>, SustainabilityTotals> {
    group_by(
        economy.processes(),
        |process| Some(process.facility),
        || FacilityAccumulator {
            economy,
            totals: SustainabilityTotals::default(),
        },
    )
}

pub(super) fn by_facility(economy: &Economy) -> BTreeMap<String, FacilityMetrics> {
    facility_totals(economy)
        .into_iter()
        .map(|(facility, totals)| {
            let facility = economy.facility(facility);
            (
                facility.id.clone(),
                FacilityMetrics {
                    facility_type: facility.facility_type,
                    energy_saved_kwh: totals.energy_saved_kwh,
                    water_saved_l: totals.water_saved_l,
                    co2_emission: totals.co2_emission,
                    process_count: totals.process_count,
                },
            )
        })
        .collect()
}
