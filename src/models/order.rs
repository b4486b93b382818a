//! Order Model

use super::Product;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dated customer transaction: an ordered list of product line items.
///
/// Line items are clones of catalog entries taken at append time. A slot is
/// `None` when the orders file referenced a name absent from the catalog;
/// such slots contribute nothing to `value` and are skipped on save.
///
/// `value` is maintained incrementally on each append and always equals the
/// sum of the resolved line items' prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    date: NaiveDate,
    items: Vec<Option<Product>>,
    value: i64,
}

impl Order {
    /// Create an empty order for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            items: Vec::new(),
            value: 0,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Total value in RON.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Line items in insertion order. `None` marks an unresolved reference.
    pub fn items(&self) -> &[Option<Product>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a product and fold its price into the running total.
    pub fn add(&mut self, product: Product) {
        self.value += product.price;
        self.items.push(Some(product));
    }

    /// Append an empty slot for a reference that did not resolve.
    pub fn add_missing(&mut self) {
        self.items.push(None);
    }

    /// Names of the resolved line items, in insertion order.
    pub fn product_names(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter_map(|slot| slot.as_ref().map(|p| p.name.as_str()))
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.product_names().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, "; Value: {}RON; Date: {}", self.value, self.date)
    }
}
