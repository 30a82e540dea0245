//! Goal compliance per facility

use std::collections::BTreeMap;

use crate::domain::entities::{Economy, EntityRef, GoalComplianceByFacility};
use crate::domain::value_objects::ComplianceMetric;

use super::by_facility::facility_totals;

/// Judge every explicit facility–goal association.
///
/// A facility with no processes compares an aggregate of 0. Facilities
/// without goals get no entry.
pub(super) fn goal_compliance(economy: &Economy, metric: ComplianceMetric) -> GoalComplianceByFacility {
    let totals = facility_totals(economy);
    let mut compliance = GoalComplianceByFacility::new();

    for (facility_ref, facility) in EntityRef::enumerate(economy.facilities()) {
        if facility.goals.is_empty() {
            continue;
        }
        let value = totals
            .get(&facility_ref)
            .map_or(0.0, |totals| totals.value(metric));

        let goals: BTreeMap<String, bool> = facility
            .goals
            .iter()
            .map(|goal| {
                let goal = economy.goal(*goal);
                (
                    goal.id.clone(),
                    goal.comparator.is_satisfied_by(value, goal.standard),
                )
            })
            .collect();
        compliance.insert(facility.id.clone(), goals);
    }

    compliance
}
