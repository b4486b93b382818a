//! Sales aggregation and report rendering

pub mod aggregate;
pub mod format;

pub use aggregate::{best_sellers, sales_by_date};
pub use format::{render_best_sellers, render_sales_report, save_report};
