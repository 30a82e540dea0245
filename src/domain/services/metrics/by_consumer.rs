//! Ordering and returning behaviour per consumer

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{ConsumerMetrics, Economy, Order};
use crate::domain::services::grouping::{group_by, Reducer};
use crate::domain::services::numeric::{ratio, RATE_DECIMALS};

enum ConsumerEvent<'a> {
    Placed(&'a Order),
    Returned,
}

struct ConsumerAccumulator<'a> {
    economy: &'a Economy,
    orders: usize,
    returns: usize,
    product_names: BTreeSet<&'a str>,
    retailers: BTreeSet<&'a str>,
}

impl<'a> ConsumerAccumulator<'a> {
    fn new(economy: &'a Economy) -> Self {
        Self {
            economy,
            orders: 0,
            returns: 0,
            product_names: BTreeSet::new(),
            retailers: BTreeSet::new(),
        }
    }
}

impl<'a> Reducer<(&'a str, ConsumerEvent<'a>)> for ConsumerAccumulator<'a> {
    type Output = ConsumerMetrics;

    fn push(&mut self, (_, event): (&'a str, ConsumerEvent<'a>)) {
        match event {
            ConsumerEvent::Placed(order) => {
                self.orders += 1;
                let product = self.economy.product(order.product);
                self.product_names.insert(product.name.as_str());
                self.retailers
                    .insert(self.economy.actor(product.retailer).id.as_str());
            }
            ConsumerEvent::Returned => self.returns += 1,
        }
    }

    fn finish(self) -> ConsumerMetrics {
        ConsumerMetrics {
            orders: self.orders,
            returns: self.returns,
            return_rate: ratio(self.returns, self.orders, RATE_DECIMALS),
            distinct_products_ordered: self.product_names.len(),
            distinct_retailers_used: self.retailers.len(),
        }
    }
}

pub(super) fn by_consumer(economy: &Economy) -> BTreeMap<String, ConsumerMetrics> {
    let placed = economy.orders().iter().map(|order| {
        let consumer = economy.actor(order.consumer).id.as_str();
        (consumer, ConsumerEvent::Placed(order))
    });
    let returned = economy.returns().iter().map(|ret| {
        let consumer = economy.actor(ret.consumer).id.as_str();
        (consumer, ConsumerEvent::Returned)
    });

    group_by(
        placed.chain(returned),
        |(consumer, _)| Some(consumer.to_string()),
        || ConsumerAccumulator::new(economy),
    )
}
