//! Scenario: full report for the sample model
//!
//! Journey: a model document is loaded, then measured and projected.
//!
//! Success Criteria:
//! - the document resolves to the same economy as the builder fixture
//! - compliance follows the configured metric
//! - the graph holds one node per entity

use std::path::Path;

use chrono::{TimeZone, Utc};

use ceml::domain::entities::{EdgeType, NodeType};
use ceml::domain::ports::FixedClock;
use ceml::domain::services::GeneratorInfo;
use ceml::infrastructure::{parse_economy, DocumentFormat};
use ceml::{ComplianceMetric, GraphProjector, MetricsAggregator, ReportAssembler};

use crate::common::*;

#[test]
fn scenario_document_matches_builder_fixture() {
    let loaded = parse_economy(SAMPLE_MODEL, DocumentFormat::Yaml, Path::new("sample.yaml"))
        .expect("sample model should load");

    assert_eq!(loaded, sample_economy());
    assert_eq!(loaded.entity_count(), SAMPLE_ENTITY_COUNT);
}

#[test]
fn scenario_compliance_depends_on_metric() {
    let economy = sample_economy();

    let energy = MetricsAggregator::new(ComplianceMetric::Energy).aggregate(&economy);
    assert!(energy.goal_compliance_by_facility["f-recycle"]["g-energy"]);
    assert!(!energy.goal_compliance_by_facility["f-recycle"]["g-co2"]);
    assert!(!energy.goal_compliance_by_facility["f-repair"]["g-energy"]);
    assert!(!energy.goal_compliance_by_facility.contains_key("f-refurb"));

    // f-recycle emitted 4.5 kg CO2 across its shipments
    let co2 = MetricsAggregator::new(ComplianceMetric::Co2).aggregate(&economy);
    assert!(!co2.goal_compliance_by_facility["f-recycle"]["g-energy"]);
    assert!(co2.goal_compliance_by_facility["f-recycle"]["g-co2"]);
}

#[test]
fn scenario_facility_totals() {
    let metrics = MetricsAggregator::default().aggregate(&sample_economy());

    let recycle = &metrics.by_facility["f-recycle"];
    assert_eq!(recycle.process_count, 2);
    assert_eq!(recycle.energy_saved_kwh, 15.0);
    assert_eq!(recycle.water_saved_l, 150.0);
    assert_eq!(recycle.co2_emission, 4.5);
    assert!(!metrics.by_facility.contains_key("f-refurb"));

    assert_eq!(metrics.aggregates.energy_saved_kwh, 19.0);
    assert_eq!(metrics.aggregates.water_saved_l, 160.0);
    assert_eq!(metrics.aggregates.co2_emission, 5.0);
}

#[test]
fn scenario_graph_covers_every_entity() {
    let graph = GraphProjector::new().project(&sample_economy());

    assert_eq!(graph.nodes.len(), SAMPLE_ENTITY_COUNT);
    assert_eq!(graph.edges.len(), 40);
    assert_eq!(graph.count_nodes(NodeType::Consumer), 2);
    assert_eq!(graph.count_nodes(NodeType::Shipment), 4);
    assert_eq!(graph.count_edges(EdgeType::FacilityHasGoal), 3);
    assert_eq!(graph.count_edges(EdgeType::ProcessRecyclesComponent), 1);
    assert!(graph.node("f-refurb").is_some());
}

#[test]
fn scenario_report_metadata() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 12, 8, 14, 41, 4).unwrap());
    let assembler = ReportAssembler::new(clock, GeneratorInfo::default(), MetricsAggregator::default());

    let report = assembler.assemble(&sample_economy());

    assert_eq!(report.metadata.economy_name, "Sample Economy");
    assert_eq!(report.metadata.generated_at, "2025-12-08T14:41:04.000Z");
    assert_eq!(report.metadata.generator, "ceml-cli");
    assert_eq!(report.metadata.schema_version, "1.0");
    assert_eq!(report.metrics.counts.products, 3);
    assert_eq!(report.graph.nodes.len(), SAMPLE_ENTITY_COUNT);
}
