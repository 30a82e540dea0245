//! Metrics aggregator properties

use proptest::prelude::*;

use ceml::domain::entities::{Economy, NumericRange};
use ceml::domain::value_objects::{ActorKind, ComplianceMetric};
use ceml::MetricsAggregator;

use crate::strategy::economy;

fn assert_range(range: &NumericRange, name: &str) -> Result<(), TestCaseError> {
    prop_assert!(range.min <= range.max, "{name}: min > max in {range:?}");
    prop_assert!(range.avg >= range.min as f64, "{name}: avg < min in {range:?}");
    prop_assert!(range.avg <= range.max as f64, "{name}: avg > max in {range:?}");
    Ok(())
}

fn facility_value(economy: &Economy, facility: &str, metric: ComplianceMetric) -> f64 {
    economy
        .processes()
        .iter()
        .filter(|p| economy.facility(p.facility).id == facility)
        .fold(0.0, |total, p| {
            total
                + match metric {
                    ComplianceMetric::Energy => p.energy_saved_kwh,
                    ComplianceMetric::Water => p.water_saved_l,
                    ComplianceMetric::Co2 => economy.process_co2(p),
                }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn counts_partition_their_totals(economy in economy()) {
        let counts = MetricsAggregator::default().aggregate(&economy).counts;

        prop_assert_eq!(
            counts.consumers + counts.manufacturers + counts.retailers,
            economy.actors().len()
        );
        let f = counts.facilities;
        prop_assert_eq!(f.recycle + f.repair + f.refurbish, f.total);
        prop_assert_eq!(f.total, economy.facilities().len());
        let p = counts.circular_processes;
        prop_assert_eq!(p.recycle + p.repair + p.refurbish, p.total);
        prop_assert_eq!(p.total, economy.processes().len());
        let s = counts.shipments;
        prop_assert_eq!(s.delivered + s.pending, s.total);
        prop_assert_eq!(s.total, economy.shipments().len());
    }

    #[test]
    fn ratios_stay_within_unit_interval(economy in economy()) {
        let metrics = MetricsAggregator::default().aggregate(&economy);

        let rate = metrics.lifecycle.product_return_rate;
        prop_assert!((0.0..=1.0).contains(&rate));
        if economy.orders().is_empty() {
            prop_assert_eq!(rate, 0.0);
        }

        let delivered = metrics.shipment_metrics.delivered_ratio;
        prop_assert!((0.0..=1.0).contains(&delivered));
        if economy.shipments().is_empty() {
            prop_assert_eq!(delivered, 0.0);
        }

        for retailer in metrics.by_retailer.values() {
            prop_assert!((0.0..=1.0).contains(&retailer.returned_product_ratio));
            prop_assert!(retailer.returns <= retailer.orders);
        }
        for consumer in metrics.by_consumer.values() {
            prop_assert!((0.0..=1.0).contains(&consumer.return_rate));
        }
    }

    #[test]
    fn day_ranges_are_ordered(economy in economy()) {
        let lifecycle = MetricsAggregator::default().aggregate(&economy).lifecycle;

        assert_range(&lifecycle.order_to_return_days, "orderToReturnDays")?;
        assert_range(&lifecycle.assembly_to_order_days, "assemblyToOrderDays")?;
        assert_range(&lifecycle.assembly_to_return_days, "assemblyToReturnDays")?;

        if economy.returns().is_empty() {
            prop_assert_eq!(lifecycle.order_to_return_days, NumericRange::default());
            prop_assert_eq!(lifecycle.assembly_to_return_days, NumericRange::default());
        }
    }

    #[test]
    fn keyed_groups_only_hold_active_entities(economy in economy()) {
        let metrics = MetricsAggregator::default().aggregate(&economy);

        let ordered: usize = metrics.by_retailer.values().map(|r| r.orders).sum();
        prop_assert_eq!(ordered, economy.orders().len());
        let returned: usize = metrics.by_consumer.values().map(|c| c.returns).sum();
        prop_assert_eq!(returned, economy.returns().len());

        let processed: usize = metrics.by_facility.values().map(|f| f.process_count).sum();
        prop_assert_eq!(processed, economy.processes().len());
        prop_assert!(metrics.by_facility.values().all(|f| f.process_count > 0));

        let made: usize = metrics.by_manufacturer.values().map(|m| m.component_count).sum();
        prop_assert_eq!(made, economy.components().len());

        let products: usize = metrics.by_product_type.values().map(|t| t.total_products).sum();
        prop_assert_eq!(products, economy.products().len());

        let shipped: usize = metrics
            .shipment_metrics
            .by_destination
            .values()
            .map(|d| d.shipments)
            .sum();
        prop_assert_eq!(shipped, economy.shipments().len());

        for consumer in economy.actors_of_kind(ActorKind::Consumer) {
            if let Some(stats) = metrics.by_consumer.get(&consumer.id) {
                prop_assert!(stats.orders > 0 || stats.returns > 0);
            }
        }
    }

    #[test]
    fn compliance_follows_facility_totals(
        economy in economy(),
        metric in prop::sample::select(vec![
            ComplianceMetric::Energy,
            ComplianceMetric::Water,
            ComplianceMetric::Co2,
        ]),
    ) {
        let compliance = MetricsAggregator::new(metric)
            .aggregate(&economy)
            .goal_compliance_by_facility;

        let with_goals = economy.facilities().iter().filter(|f| !f.goals.is_empty()).count();
        prop_assert_eq!(compliance.len(), with_goals);

        for facility in economy.facilities().iter().filter(|f| !f.goals.is_empty()) {
            let value = facility_value(&economy, &facility.id, metric);
            let verdicts = &compliance[&facility.id];
            for goal in &facility.goals {
                let goal = economy.goal(*goal);
                prop_assert_eq!(
                    verdicts[&goal.id],
                    goal.comparator.is_satisfied_by(value, goal.standard),
                    "facility {} goal {} value {}",
                    facility.id,
                    goal.id,
                    value
                );
            }
        }
    }

    #[test]
    fn time_series_counts_parsable_dates_only(economy in economy()) {
        let series = MetricsAggregator::default().aggregate(&economy).time_series;

        let parsable_orders = economy.orders().iter().filter(|o| o.date.parse().is_some()).count();
        prop_assert_eq!(series.orders_per_year.values().sum::<usize>(), parsable_orders);

        let parsable_shipments = economy
            .shipments()
            .iter()
            .filter(|s| s.delivery_date.parse().is_some())
            .count();
        prop_assert_eq!(series.shipments_per_year.values().sum::<usize>(), parsable_shipments);
        prop_assert!(
            series.delivered_shipments_per_year.values().sum::<usize>() <= parsable_shipments
        );
    }
}
