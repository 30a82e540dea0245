//! Orders and returns per retailer
//!
//! Both are attributed to the retailer of the ordered product.

use std::collections::BTreeMap;

use crate::domain::entities::{Economy, RetailerMetrics};
use crate::domain::services::grouping::{group_by, Reducer};
use crate::domain::services::numeric::{ratio, RATE_DECIMALS};

enum RetailerEvent {
    Order,
    Return,
}

#[derive(Default)]
struct RetailerTally {
    orders: usize,
    returns: usize,
}

impl<K> Reducer<(K, RetailerEvent)> for RetailerTally {
    type Output = RetailerMetrics;

    fn push(&mut self, (_, event): (K, RetailerEvent)) {
        match event {
            RetailerEvent::Order => self.orders += 1,
            RetailerEvent::Return => self.returns += 1,
        }
    }

    fn finish(self) -> RetailerMetrics {
        RetailerMetrics {
            orders: self.orders,
            returns: self.returns,
            returned_product_ratio: ratio(self.returns, self.orders, RATE_DECIMALS),
        }
    }
}

pub(super) fn by_retailer(economy: &Economy) -> BTreeMap<String, RetailerMetrics> {
    let orders = economy
        .orders()
        .iter()
        .map(|order| (economy.retailer_of(order), RetailerEvent::Order));
    let returns = economy.returns().iter().map(|ret| {
        let order = economy.order(ret.order);
        (economy.retailer_of(order), RetailerEvent::Return)
    });

    group_by(
        orders.chain(returns),
        |(retailer, _)| Some(retailer.id.clone()),
        RetailerTally::default,
    )
}
