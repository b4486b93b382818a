//! Order Store
//!
//! Parses and serializes the orders file and owns the session's mutable
//! order set. One order per line: product names joined by single spaces,
//! a comma, then an ISO-8601 date:
//!
//! ```text
//! Burger Cola,2024-01-01
//! ```
//!
//! Orders live in an arena addressed by [`OrderId`]; ids are stable for the
//! whole session so interactive deletion is immune to index shifting.

use super::Catalog;
use crate::core::{PosError, PosResult};
use crate::models::Order;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// Stable order handle, unique within a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OrderId(u64);

/// The session's order set, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    entries: Vec<(OrderId, Order)>,
    next_id: u64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an orders file, resolving product names against `catalog`.
    ///
    /// A name absent from the catalog does not fail the line: the order
    /// receives an empty slot instead, and a warning is logged. Round-trip
    /// fidelity through [`serialize`](Self::serialize) holds whenever every
    /// referenced product exists in the catalog.
    pub fn parse(input: &str, catalog: &Catalog) -> PosResult<Self> {
        let mut store = Self::new();
        for (idx, line) in input.lines().enumerate() {
            let lineno = idx + 1;
            let (names, date) = line
                .split_once(',')
                .ok_or_else(|| PosError::order(lineno, "missing ',' before date"))?;
            let date: NaiveDate = date
                .parse()
                .map_err(|_| PosError::order(lineno, format!("invalid date '{date}'")))?;

            let mut order = Order::new(date);
            for name in names.split(' ') {
                match catalog.find_by_name(name) {
                    Some(product) => order.add(product.clone()),
                    None => {
                        tracing::warn!(line = lineno, name, "unresolved product reference");
                        order.add_missing();
                    }
                }
            }
            store.add(order);
        }
        Ok(store)
    }

    /// Read and parse the orders file at `path`.
    pub fn load(path: impl AsRef<Path>, catalog: &Catalog) -> PosResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let store = Self::parse(&text, catalog)?;
        tracing::info!(
            orders = store.len(),
            path = %path.as_ref().display(),
            "orders loaded"
        );
        Ok(store)
    }

    /// Serialize the order set in the exact inverse shape of [`parse`](Self::parse).
    ///
    /// Unresolved slots carry no name and are skipped.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (_, order) in &self.entries {
            let mut first = true;
            for name in order.product_names() {
                if !first {
                    out.push(' ');
                }
                out.push_str(name);
                first = false;
            }
            let _ = writeln!(out, ",{}", order.date());
        }
        out
    }

    /// Rewrite the orders file at `path` in full.
    pub fn save(&self, path: impl AsRef<Path>) -> PosResult<()> {
        std::fs::write(path.as_ref(), self.serialize())?;
        tracing::info!(
            orders = self.len(),
            path = %path.as_ref().display(),
            "orders saved"
        );
        Ok(())
    }

    /// Append an order to the set, returning its stable id.
    pub fn add(&mut self, order: Order) -> OrderId {
        let id = OrderId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, order));
        id
    }

    /// Remove an order by id. Returns the order, or `None` if the id is gone.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let pos = self.entries.iter().position(|(e, _)| *e == id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.entries
            .iter()
            .find(|(e, _)| *e == id)
            .map(|(_, o)| o)
    }

    /// Id of the order at a 0-based position.
    pub fn id_at(&self, index: usize) -> Option<OrderId> {
        self.entries.get(index).map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All orders, in set order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.entries.iter().map(|(_, o)| o)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderId, &Order)> {
        self.entries.iter().map(|(id, o)| (*id, o))
    }
}
