//! Error types for the point-of-sale core

use thiserror::Error;

/// Point-of-sale error types
#[derive(Debug, Error)]
pub enum PosError {
    /// Malformed catalog record; aborts the whole load
    #[error("Catalog parse error at line {line}: {reason}")]
    CatalogParse { line: usize, reason: String },

    /// Malformed order record (bad date or missing separator)
    #[error("Order parse error at line {line}: {reason}")]
    OrderParse { line: usize, reason: String },

    /// A 1-based menu/product/order selection outside [1, max]
    #[error("Invalid selection {given}, expected a value in [1, {max}]")]
    InvalidSelection { given: i64, max: usize },

    /// IO error while reading or writing a store file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PosError {
    pub(crate) fn catalog(line: usize, reason: impl Into<String>) -> Self {
        Self::CatalogParse {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn order(line: usize, reason: impl Into<String>) -> Self {
        Self::OrderParse {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for point-of-sale operations
pub type PosResult<T> = Result<T, PosError>;
