//! Return rate and day gaps along order → return chains

use crate::domain::entities::{Economy, LifecycleMetrics, Return};
use crate::domain::services::grouping::{reduce, DayRange};
use crate::domain::services::numeric::{ratio, RATE_DECIMALS};

/// Day gaps observed for one return; `None` where a date did not parse
struct ReturnTimeline {
    order_to_return: Option<u64>,
    assembly_to_order: Option<u64>,
    assembly_to_return: Option<u64>,
}

impl ReturnTimeline {
    fn of(economy: &Economy, ret: &Return) -> Self {
        let order = economy.order(ret.order);
        let product = economy.product(order.product);

        let timeline = Self {
            order_to_return: order.date.days_until(&ret.date),
            assembly_to_order: product.assembly_date.days_until(&order.date),
            assembly_to_return: product.assembly_date.days_until(&ret.date),
        };
        if timeline.order_to_return.is_none()
            || timeline.assembly_to_order.is_none()
            || timeline.assembly_to_return.is_none()
        {
            tracing::debug!(
                return_id = %ret.id,
                order_id = %order.id,
                product_id = %product.id,
                "excluding unparsable dates from lifecycle ranges"
            );
        }
        timeline
    }
}

pub(super) fn lifecycle(economy: &Economy) -> LifecycleMetrics {
    let timelines: Vec<ReturnTimeline> = economy
        .returns()
        .iter()
        .map(|ret| ReturnTimeline::of(economy, ret))
        .collect();

    LifecycleMetrics {
        product_return_rate: ratio(
            economy.returns().len(),
            economy.orders().len(),
            RATE_DECIMALS,
        ),
        order_to_return_days: reduce(
            timelines.iter().filter_map(|t| t.order_to_return),
            DayRange::default,
        ),
        assembly_to_order_days: reduce(
            timelines.iter().filter_map(|t| t.assembly_to_order),
            DayRange::default,
        ),
        assembly_to_return_days: reduce(
            timelines.iter().filter_map(|t| t.assembly_to_return),
            DayRange::default,
        ),
    }
}
