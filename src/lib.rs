//! # canteen-pos
//!
//! Small point-of-sale record keeper: a fixed product catalog, a mutable
//! order set, and two derived reports (per-date revenue, top-N best
//! sellers), all persisted as line-oriented flat files.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/      # Configuration, errors, logging
//! ├── models/    # Products and orders
//! ├── store/     # Catalog loader, order store (flat-file codecs)
//! ├── reports/   # Aggregation engine, report formatter
//! ├── session.rs # Session state and CLI-facing operations
//! └── menu.rs    # Interactive numbered-choice loop
//! ```
//!
//! Everything is single-threaded and synchronous: each load or save is one
//! sequential pass over a file, and aggregation is a pure computation over
//! the in-memory order set.

pub mod core;
pub mod menu;
pub mod models;
pub mod reports;
pub mod session;
pub mod store;

// Re-export public types
pub use crate::core::logger::init_logger;
pub use crate::core::{Config, PosError, PosResult};
pub use models::{Category, Order, Product, ProductKind};
pub use session::Session;
pub use store::{Catalog, OrderId, OrderStore};
