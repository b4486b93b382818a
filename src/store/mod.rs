//! Flat-file persistence
//!
//! Line-oriented codecs for the catalog and orders files. Each load or save
//! is a single sequential pass; files are fully rewritten, never appended.

pub mod catalog;
pub mod orders;

pub use catalog::Catalog;
pub use orders::{OrderId, OrderStore};
