//! Scenario: product return rate
//!
//! Journey: a shop sells a widget; some orders come back.
//!
//! Success Criteria:
//! - one return out of two orders is a 0.5 rate
//! - no orders is a 0 rate, not an error and not NaN

use ceml::MetricsAggregator;

use crate::common::*;

#[test]
fn scenario_one_of_two_orders_returned() {
    let metrics = MetricsAggregator::default().aggregate(&orders_and_returns(2, 1));

    assert_eq!(metrics.lifecycle.product_return_rate, 0.5);
    assert_eq!(metrics.counts.orders, 2);
    assert_eq!(metrics.counts.returns, 1);

    let retailer = &metrics.by_retailer["shop"];
    assert_eq!(retailer.orders, 2);
    assert_eq!(retailer.returns, 1);
    assert_eq!(retailer.returned_product_ratio, 0.5);

    let consumer = &metrics.by_consumer["buyer"];
    assert_eq!(consumer.return_rate, 0.5);
    assert_eq!(consumer.distinct_products_ordered, 1);
    assert_eq!(consumer.distinct_retailers_used, 1);
}

#[test]
fn scenario_no_orders_is_a_zero_rate() {
    let metrics = MetricsAggregator::default().aggregate(&orders_and_returns(0, 0));

    assert_eq!(metrics.lifecycle.product_return_rate, 0.0);
    assert!(!metrics.lifecycle.product_return_rate.is_nan());
    assert!(metrics.by_retailer.is_empty());
    assert!(metrics.by_consumer.is_empty());
}

#[test]
fn scenario_gaps_between_order_and_return() {
    let metrics = MetricsAggregator::default().aggregate(&orders_and_returns(3, 3));

    let range = metrics.lifecycle.order_to_return_days;
    assert_eq!((range.avg, range.min, range.max), (9.0, 9, 9));
    assert_eq!(metrics.lifecycle.product_return_rate, 1.0);
}

#[test]
fn scenario_sample_model_rates() {
    let metrics = MetricsAggregator::default().aggregate(&sample_economy());

    assert_eq!(metrics.lifecycle.product_return_rate, 0.5);
    assert_eq!(metrics.by_retailer["shop-a"].returned_product_ratio, 0.33);
    assert_eq!(metrics.by_retailer["shop-b"].returned_product_ratio, 1.0);
    assert_eq!(metrics.by_consumer["alice"].return_rate, 0.5);
    assert_eq!(metrics.by_consumer["bob"].return_rate, 0.5);
}
