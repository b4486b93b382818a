//! Session configuration
//!
//! All paths and limits can be overridden through environment variables:
//!
//! | Environment variable | Default | Purpose |
//! |----------------------|---------|---------|
//! | CATALOG_FILE | menu.txt | Product catalog, read-only |
//! | ORDERS_FILE | orders.txt | Orders, read at start, rewritten at exit |
//! | SALES_REPORT_FILE | sales_report.txt | Per-date revenue report, write-only |
//! | BEST_SELLERS_FILE | best_sellers.txt | Top-N report, write-only |
//! | BEST_SELLERS_LIMIT | 5 | Number of entries in the top-N report |

/// Session configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Product catalog path
    pub catalog_file: String,
    /// Orders store path
    pub orders_file: String,
    /// Sales report output path
    pub sales_report_file: String,
    /// Best-sellers report output path
    pub best_sellers_file: String,
    /// Entry cap for the best-sellers report
    pub best_sellers_limit: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            catalog_file: std::env::var("CATALOG_FILE").unwrap_or_else(|_| "menu.txt".into()),
            orders_file: std::env::var("ORDERS_FILE").unwrap_or_else(|_| "orders.txt".into()),
            sales_report_file: std::env::var("SALES_REPORT_FILE")
                .unwrap_or_else(|_| "sales_report.txt".into()),
            best_sellers_file: std::env::var("BEST_SELLERS_FILE")
                .unwrap_or_else(|_| "best_sellers.txt".into()),
            best_sellers_limit: std::env::var("BEST_SELLERS_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(5),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: "menu.txt".into(),
            orders_file: "orders.txt".into(),
            sales_report_file: "sales_report.txt".into(),
            best_sellers_file: "best_sellers.txt".into(),
            best_sellers_limit: 5,
        }
    }
}
