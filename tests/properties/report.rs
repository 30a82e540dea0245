//! Report assembly properties

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use ceml::domain::ports::FixedClock;
use ceml::domain::services::GeneratorInfo;
use ceml::{CircularEconomyReport, GraphProjector, MetricsAggregator, ReportAssembler};

use crate::strategy::economy;

fn assembler() -> ReportAssembler<FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap());
    ReportAssembler::new(clock, GeneratorInfo::default(), MetricsAggregator::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn report_matches_independent_engines(economy in economy()) {
        let report = assembler().assemble(&economy);

        prop_assert_eq!(&report.metrics, &MetricsAggregator::default().aggregate(&economy));
        prop_assert_eq!(&report.graph, &GraphProjector::new().project(&economy));
        prop_assert_eq!(report.metadata.economy_name.as_str(), "Arbitrary");
        prop_assert_eq!(report.metadata.generated_at.as_str(), "2025-06-30T12:00:00.000Z");
    }

    #[test]
    fn report_survives_json(economy in economy()) {
        let report = assembler().assemble(&economy);

        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: CircularEconomyReport = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, report);
    }
}
