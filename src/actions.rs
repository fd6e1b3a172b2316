//! Operator actions: add, edit, delete and report.
//!
//! Each action takes already-collected input, calls the store or the report
//! generator, and returns a [`Notice`] for the operator. Input problems and
//! unknown ids come back as [`InventoryError::Validation`] and
//! [`InventoryError::ProductNotFound`] so callers can turn them into warnings
//! with [`Notice::from_operator_error`].

use std::fmt;

use crate::error::{InventoryError, Result};
use crate::report::generate_low_stock_report;
use crate::store::{Product, ProductStore};

pub const INVALID_INPUT: &str = "Invalid input!";
pub const PRODUCT_NOT_FOUND: &str = "Product not found!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
    Report,
}

impl NoticeLevel {
    pub fn title(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "Info",
            NoticeLevel::Warning => "Warning",
            NoticeLevel::Error => "Error",
            NoticeLevel::Report => "Low Stock Report",
        }
    }
}

/// A message for the operator, shown by whatever presents the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn report(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Report,
            message: text.into(),
        }
    }

    /// Warning for errors the operator caused; `None` for storage and IO failures.
    pub fn from_operator_error(err: &InventoryError) -> Option<Self> {
        match err {
            InventoryError::ProductNotFound(_) => Some(Notice::warning(PRODUCT_NOT_FOUND)),
            InventoryError::Validation(reason) => {
                Some(Notice::warning(format!("{} {}", INVALID_INPUT, reason)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Report => write!(f, "{}:\n{}", self.level.title(), self.message),
            _ => write!(f, "{}: {}", self.level.title(), self.message),
        }
    }
}

fn missing_input(field: &str) -> InventoryError {
    InventoryError::Validation(format!("{} is required", field))
}

/// Looks up a record, turning a miss into [`InventoryError::ProductNotFound`].
pub fn lookup_product(store: &impl ProductStore, id: i64) -> Result<Product> {
    store.get(id)?.ok_or(InventoryError::ProductNotFound(id))
}

pub fn add_product(
    store: &impl ProductStore,
    name: Option<&str>,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<Notice> {
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| missing_input("product name"))?;
    let quantity = quantity.ok_or_else(|| missing_input("quantity"))?;
    let price = price.ok_or_else(|| missing_input("price"))?;

    let id = store.create(name, quantity, price)?;
    tracing::info!("Added product {} ({})", id, name);
    Ok(Notice::info(format!("Product added successfully! (ID: {})", id)))
}

/// Updates a record. Fields left as `None` keep their current value.
pub fn edit_product(
    store: &impl ProductStore,
    id: i64,
    name: Option<&str>,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<Notice> {
    let current = lookup_product(store, id)?;

    let name = name.unwrap_or(current.name.as_str());
    let quantity = quantity.unwrap_or(current.quantity);
    let price = price.unwrap_or(current.price);

    // The record can disappear between the lookup and the update.
    if !store.update(id, name, quantity, price)? {
        tracing::warn!("Product {} vanished before update", id);
        return Err(InventoryError::ProductNotFound(id));
    }

    tracing::info!("Updated product {}", id);
    Ok(Notice::info("Product updated successfully!"))
}

pub fn delete_product(store: &impl ProductStore, id: i64) -> Result<Notice> {
    if !store.delete(id)? {
        tracing::warn!("Delete requested for unknown product {}", id);
        return Err(InventoryError::ProductNotFound(id));
    }

    tracing::info!("Deleted product {}", id);
    Ok(Notice::info("Product deleted successfully!"))
}

pub fn low_stock_report(store: &impl ProductStore, threshold: i64) -> Result<Notice> {
    let text = generate_low_stock_report(store, threshold)?;
    Ok(Notice::report(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NO_LOW_STOCK_MESSAGE;
    use crate::store::sqlite::SqliteStore;
    use tempfile::TempDir;

    fn create_test_store() -> (SqliteStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(temp_dir.path().join("inventory.db"));
        store.initialize().unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_add_product_reports_id() {
        let (store, _temp_dir) = create_test_store();

        let notice = add_product(&store, Some("Widget"), Some(10), Some(2.5)).unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, "Product added successfully! (ID: 1)");
    }

    #[test]
    fn test_add_product_requires_every_field() {
        let (store, _temp_dir) = create_test_store();

        let err = add_product(&store, Some(""), Some(10), Some(2.5)).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        let err = add_product(&store, Some("Widget"), None, Some(2.5)).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        let err = add_product(&store, Some("Widget"), Some(1), None).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_edit_product_keeps_unset_fields() {
        let (store, _temp_dir) = create_test_store();
        let id = store.create("Widget", 10, 2.5).unwrap();

        edit_product(&store, id, None, Some(4), None).unwrap();

        let product = store.get(id).unwrap().unwrap();
        assert_eq!(product, Product::new(id, "Widget", 4, 2.5));
    }

    #[test]
    fn test_edit_unknown_product() {
        let (store, _temp_dir) = create_test_store();

        let err = edit_product(&store, 999, Some("X"), Some(1), Some(1.0)).unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotFound(999)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_product() {
        let (store, _temp_dir) = create_test_store();

        let err = delete_product(&store, 3).unwrap_err();
        assert_eq!(
            Notice::from_operator_error(&err),
            Some(Notice::warning(PRODUCT_NOT_FOUND))
        );
    }

    #[test]
    fn test_low_stock_report_notice() {
        let (store, _temp_dir) = create_test_store();

        let notice = low_stock_report(&store, 5).unwrap();
        assert_eq!(notice.level, NoticeLevel::Report);
        assert_eq!(notice.message, NO_LOW_STOCK_MESSAGE);
        assert_eq!(
            notice.to_string(),
            format!("Low Stock Report:\n{}", NO_LOW_STOCK_MESSAGE)
        );
    }

    #[test]
    fn test_storage_errors_are_not_operator_warnings() {
        let err = InventoryError::Storage(rusqlite::Error::InvalidQuery);
        assert!(Notice::from_operator_error(&err).is_none());
        assert!(!err.is_operator_error());
    }
}
