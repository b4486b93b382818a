//! Configuration and error types

pub mod config;
pub mod error;
pub mod logger;

pub use config::Config;
pub use error::{PosError, PosResult};
