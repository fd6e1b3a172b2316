//! Low-stock report over the product store.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{Product, ProductStore};

/// Text returned when nothing is below the threshold.
pub const NO_LOW_STOCK_MESSAGE: &str = "No items below the threshold.";

/// Records whose quantity is strictly below `threshold`, in store order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockReport {
    pub threshold: i64,
    pub items: Vec<Product>,
}

impl LowStockReport {
    pub fn collect(store: &impl ProductStore, threshold: i64) -> Result<Self> {
        let items = store.list_below(threshold)?;
        Ok(Self { threshold, items })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One line per record, or [`NO_LOW_STOCK_MESSAGE`] when empty.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_LOW_STOCK_MESSAGE.to_string();
        }

        self.items
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn generate_low_stock_report(store: &impl ProductStore, threshold: i64) -> Result<String> {
    let report = LowStockReport::collect(store, threshold)?;
    tracing::debug!(
        "Low stock report for threshold {}: {} item(s)",
        threshold,
        report.items.len()
    );
    Ok(report.render())
}
