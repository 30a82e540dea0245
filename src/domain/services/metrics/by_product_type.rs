//! Price and composition statistics per product name

use std::collections::BTreeMap;

use crate::domain::entities::{Economy, Product, ProductTypeMetrics};
use crate::domain::services::grouping::{group_by, Reducer};
use crate::domain::services::numeric::{average, mean, RATE_DECIMALS};

#[derive(Default)]
struct PriceStats {
    count: usize,
    price_total: f64,
    min_price: Option<f64>,
    max_price: Option<f64>,
    component_total: usize,
}

impl<'a> Reducer<&'a Product> for PriceStats {
    type Output = ProductTypeMetrics;

    fn push(&mut self, product: &'a Product) {
        self.count += 1;
        self.price_total += product.price;
        self.min_price = Some(self.min_price.map_or(product.price, |m| m.min(product.price)));
        self.max_price = Some(self.max_price.map_or(product.price, |m| m.max(product.price)));
        self.component_total += product.components.len();
    }

    fn finish(self) -> ProductTypeMetrics {
        ProductTypeMetrics {
            total_products: self.count,
            avg_price: mean(self.price_total, self.count, RATE_DECIMALS),
            min_price: self.min_price.unwrap_or(0.0),
            max_price: self.max_price.unwrap_or(0.0),
            avg_component_count: average(self.component_total as f64, self.count),
        }
    }
}

pub(super) fn by_product_type(economy: &Economy) -> BTreeMap<String, ProductTypeMetrics> {
    group_by(
        economy.products(),
        |product| Some(product.name.clone()),
        PriceStats::default,
    )
}
