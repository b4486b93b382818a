//! Aggregation Engine
//!
//! Pure, deterministic aggregates over the order set. Both functions return
//! insertion-ordered pairs: groups appear in the order their key was first
//! seen while walking the orders, not sorted by key. Callers render the
//! result as-is.

use crate::models::Order;
use chrono::NaiveDate;

/// Revenue per date, one entry per distinct date present in `orders`.
///
/// Entries follow first-seen date order.
pub fn sales_by_date<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<(NaiveDate, i64)> {
    let mut totals: Vec<(NaiveDate, i64)> = Vec::new();
    for order in orders {
        match totals.iter_mut().find(|(d, _)| *d == order.date()) {
            Some((_, sum)) => *sum += order.value(),
            None => totals.push((order.date(), order.value())),
        }
    }
    totals
}

/// Occurrence counts of the top `limit` product names across all orders.
///
/// An order contributing the same product twice counts twice; unresolved
/// slots carry no name and are not counted. Sorting is stable on count
/// descending with no secondary key, so ties keep first-seen order. Returns
/// every distinct name when fewer than `limit` exist.
pub fn best_sellers<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    limit: usize,
) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for order in orders {
        for name in order.product_names() {
            match counts.iter_mut().find(|(n, _)| n == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name.to_string(), 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
