//! Data models
//!
//! Catalog products and orders. Products are immutable after load; orders
//! carry product clones taken at append time.

pub mod order;
pub mod product;

// Re-exports
pub use order::Order;
pub use product::{Category, Product, ProductKind};
