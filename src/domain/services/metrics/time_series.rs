//! Yearly activity counts

use crate::domain::entities::{Economy, TimeSeriesMetrics, YearSeries};
use crate::domain::services::grouping::{group_by, Tally};
use crate::domain::value_objects::ModelDate;

/// Count dated items per year, skipping dates that do not parse
fn per_year<'a>(
    kind: &'static str,
    dates: impl IntoIterator<Item = (&'a str, &'a ModelDate)>,
) -> YearSeries {
    group_by(
        dates,
        |(id, date)| {
            let year = date.year_key();
            if year.is_none() {
                tracing::debug!(%kind, %id, date = %date, "excluding unparsable date from time series");
            }
            year
        },
        Tally::default,
    )
}

pub(super) fn time_series(economy: &Economy) -> TimeSeriesMetrics {
    TimeSeriesMetrics {
        products_assembled_per_year: per_year(
            "product",
            economy
                .products()
                .iter()
                .map(|p| (p.id.as_str(), &p.assembly_date)),
        ),
        orders_per_year: per_year(
            "order",
            economy.orders().iter().map(|o| (o.id.as_str(), &o.date)),
        ),
        shipments_per_year: per_year(
            "shipment",
            economy
                .shipments()
                .iter()
                .map(|s| (s.id.as_str(), &s.delivery_date)),
        ),
        delivered_shipments_per_year: per_year(
            "shipment",
            economy
                .shipments()
                .iter()
                .filter(|s| s.delivered)
                .map(|s| (s.id.as_str(), &s.delivery_date)),
        ),
    }
}
