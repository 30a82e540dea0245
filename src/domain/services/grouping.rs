//! Group-by-key / accumulate / derive
//!
//! Every keyed aggregation group has the same shape: route each relevant
//! event to a key, fold it into that key's accumulator, then turn each
//! accumulator into its output record. [`group_by`] does the routing and
//! the per-group logic lives in a [`Reducer`].

use std::collections::BTreeMap;

use crate::domain::entities::NumericRange;

use super::numeric::{round_to, DAYS_AVG_DECIMALS};

/// Streaming accumulator for one group
pub trait Reducer<T> {
    type Output;

    fn push(&mut self, item: T);

    fn finish(self) -> Self::Output;
}

/// Route each item to a key and reduce every group.
///
/// Items whose key is `None` are skipped. Keys only appear in the result
/// when at least one item was routed to them.
pub fn group_by<I, K, R>(
    items: I,
    key: impl Fn(&I::Item) -> Option<K>,
    new: impl Fn() -> R,
) -> BTreeMap<K, R::Output>
where
    I: IntoIterator,
    K: Ord,
    R: Reducer<I::Item>,
{
    let mut groups: BTreeMap<K, R> = BTreeMap::new();
    for item in items {
        if let Some(k) = key(&item) {
            groups.entry(k).or_insert_with(&new).push(item);
        }
    }
    groups
        .into_iter()
        .map(|(k, reducer)| (k, reducer.finish()))
        .collect()
}

/// Reduce all items into one output
pub fn reduce<I, R>(items: I, new: impl FnOnce() -> R) -> R::Output
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    let mut reducer = new();
    for item in items {
        reducer.push(item);
    }
    reducer.finish()
}

/// Counts items
#[derive(Debug, Default)]
pub struct Tally(usize);

impl<T> Reducer<T> for Tally {
    type Output = usize;

    fn push(&mut self, _item: T) {
        self.0 += 1;
    }

    fn finish(self) -> usize {
        self.0
    }
}

/// avg / min / max over day-gap samples; all zero when empty
#[derive(Debug, Default)]
pub struct DayRange {
    count: u64,
    total: u64,
    min: Option<u64>,
    max: u64,
}

impl Reducer<u64> for DayRange {
    type Output = NumericRange;

    fn push(&mut self, days: u64) {
        self.count += 1;
        self.total += days;
        self.min = Some(self.min.map_or(days, |m| m.min(days)));
        self.max = self.max.max(days);
    }

    fn finish(self) -> NumericRange {
        if self.count == 0 {
            return NumericRange::default();
        }
        NumericRange {
            avg: round_to(self.total as f64 / self.count as f64, DAYS_AVG_DECIMALS),
            min: self.min.unwrap_or(0),
            max: self.max,
        }
    }
}
