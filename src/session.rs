//! Session state
//!
//! Owns the catalog and the order set for one run and exposes the
//! operations the interactive layer calls. Selections are 1-based, matching
//! the numbering shown to the user; `0` ("finish") is handled by the caller
//! before these operations are reached.

use crate::core::{Config, PosError, PosResult};
use crate::models::{Order, Product};
use crate::reports;
use crate::store::{Catalog, OrderId, OrderStore};
use chrono::NaiveDate;

/// One interactive run over a catalog and its order set.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    orders: OrderStore,
}

impl Session {
    pub fn new(catalog: Catalog, orders: OrderStore) -> Self {
        Self { catalog, orders }
    }

    /// Load the catalog and then the orders file named by `config`.
    pub fn load(config: &Config) -> PosResult<Self> {
        let catalog = Catalog::load(&config.catalog_file)?;
        let orders = OrderStore::load(&config.orders_file, &catalog)?;
        Ok(Self::new(catalog, orders))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    /// Start an empty order for the given date. The order joins the set
    /// only when committed.
    pub fn create_order(&self, date: NaiveDate) -> Order {
        Order::new(date)
    }

    /// Append the catalog product at a 1-based position to `order`.
    pub fn add_product_to_order(&self, order: &mut Order, selection: i64) -> PosResult<&Product> {
        let index = check_selection(selection, self.catalog.len())?;
        let product = self
            .catalog
            .get(index)
            .ok_or(PosError::InvalidSelection {
                given: selection,
                max: self.catalog.len(),
            })?;
        order.add(product.clone());
        Ok(product)
    }

    /// Add a finished order to the set. An order with no products is
    /// discarded and `None` is returned.
    pub fn commit_order(&mut self, order: Order) -> Option<OrderId> {
        if order.is_empty() {
            return None;
        }
        Some(self.orders.add(order))
    }

    /// Remove the order at a 1-based position, resolving it to a stable id
    /// first so concurrent renumbering cannot delete the wrong order.
    pub fn remove_order(&mut self, selection: i64) -> PosResult<Order> {
        let index = check_selection(selection, self.orders.len())?;
        let id = self.orders.id_at(index).ok_or(PosError::InvalidSelection {
            given: selection,
            max: self.orders.len(),
        })?;
        self.orders.remove(id).ok_or(PosError::InvalidSelection {
            given: selection,
            max: self.orders.len(),
        })
    }

    /// Revenue per date, in first-seen date order.
    pub fn sales_by_date(&self) -> Vec<(NaiveDate, i64)> {
        reports::sales_by_date(self.orders.orders())
    }

    /// Top `limit` products by occurrence count.
    pub fn best_sellers(&self, limit: usize) -> Vec<(String, u64)> {
        reports::best_sellers(self.orders.orders(), limit)
    }

    /// Persist the order set and both report files named by `config`.
    pub fn save(&self, config: &Config) -> PosResult<()> {
        self.orders.save(&config.orders_file)?;
        reports::save_report(
            &config.sales_report_file,
            &reports::render_sales_report(&self.sales_by_date()),
        )?;
        reports::save_report(
            &config.best_sellers_file,
            &reports::render_best_sellers(
                &self.best_sellers(config.best_sellers_limit),
                config.best_sellers_limit,
            ),
        )?;
        Ok(())
    }
}

/// Map a 1-based selection onto a 0-based index, rejecting anything
/// outside [1, max].
fn check_selection(selection: i64, max: usize) -> PosResult<usize> {
    if selection < 1 || selection as usize > max {
        return Err(PosError::InvalidSelection {
            given: selection,
            max,
        });
    }
    Ok(selection as usize - 1)
}
