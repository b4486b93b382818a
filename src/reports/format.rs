//! Report Formatter
//!
//! Renders aggregates into the two write-only report formats. Both targets
//! are fully overwritten on save; there is no corresponding loader.

use crate::core::PosResult;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::Path;

pub const SALES_REPORT_HEADER: &str = "Sales Report";

/// Render the per-date revenue report.
///
/// ```text
/// Sales Report
/// 2024-01-01: 28RON
/// ```
pub fn render_sales_report(sales: &[(NaiveDate, i64)]) -> String {
    let mut out = String::new();
    out.push_str(SALES_REPORT_HEADER);
    out.push('\n');
    for (date, revenue) in sales {
        let _ = writeln!(out, "{date}: {revenue}RON");
    }
    out
}

/// Render the best-sellers report.
///
/// ```text
/// Best Sellers (Top 5)
/// Burger: 2
/// ```
pub fn render_best_sellers(best_sellers: &[(String, u64)], limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Best Sellers (Top {limit})");
    for (name, count) in best_sellers {
        let _ = writeln!(out, "{name}: {count}");
    }
    out
}

/// Overwrite `path` with a rendered report.
pub fn save_report(path: impl AsRef<Path>, rendered: &str) -> PosResult<()> {
    std::fs::write(path.as_ref(), rendered)?;
    tracing::info!(path = %path.as_ref().display(), "report saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sales_report() {
        let sales = vec![
            (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 28),
            (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 8),
        ];
        assert_eq!(
            render_sales_report(&sales),
            "Sales Report\n2024-01-01: 28RON\n2024-01-02: 8RON\n"
        );
    }

    #[test]
    fn test_render_best_sellers() {
        let top = vec![("Burger".to_string(), 2), ("Cola".to_string(), 2)];
        assert_eq!(
            render_best_sellers(&top, 5),
            "Best Sellers (Top 5)\nBurger: 2\nCola: 2\n"
        );
    }

    #[test]
    fn test_render_empty_reports_keep_headers() {
        assert_eq!(render_sales_report(&[]), "Sales Report\n");
        assert_eq!(render_best_sellers(&[], 3), "Best Sellers (Top 3)\n");
    }
}
