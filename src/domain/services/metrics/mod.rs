//! Metrics Aggregator
//!
//! Derives every aggregation group from one [`Economy`]. Each group lives in
//! its own module and is a pure function of the economy; the aggregator only
//! stitches the groups together.

mod aggregates;
mod by_consumer;
mod by_facility;
mod by_manufacturer;
mod by_product_type;
mod by_retailer;
mod compliance;
mod counts;
mod lifecycle;
mod shipments;
mod time_series;

pub use by_facility::{facility_totals, SustainabilityTotals};

use crate::domain::entities::{Economy, Metrics};
use crate::domain::value_objects::ComplianceMetric;

/// Computes [`Metrics`] for an economy
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAggregator {
    compliance_metric: ComplianceMetric,
}

impl MetricsAggregator {
    /// Aggregator judging goal compliance on `compliance_metric`
    pub fn new(compliance_metric: ComplianceMetric) -> Self {
        Self { compliance_metric }
    }

    pub fn compliance_metric(&self) -> ComplianceMetric {
        self.compliance_metric
    }

    /// Compute all aggregation groups. Deterministic and side-effect free.
    pub fn aggregate(&self, economy: &Economy) -> Metrics {
        tracing::debug!(
            economy = economy.name(),
            compliance_metric = %self.compliance_metric,
            "aggregating metrics"
        );

        Metrics {
            counts: counts::counts(economy),
            lifecycle: lifecycle::lifecycle(economy),
            aggregates: aggregates::aggregates(economy),
            by_facility: by_facility::by_facility(economy),
            by_retailer: by_retailer::by_retailer(economy),
            by_product_type: by_product_type::by_product_type(economy),
            by_consumer: by_consumer::by_consumer(economy),
            by_manufacturer: by_manufacturer::by_manufacturer(economy),
            time_series: time_series::time_series(economy),
            goal_compliance_by_facility: compliance::goal_compliance(
                economy,
                self.compliance_metric,
            ),
            shipment_metrics: shipments::shipment_metrics(economy),
        }
    }
}
