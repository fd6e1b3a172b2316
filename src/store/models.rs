use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Single-line rendering used by listings and the low-stock report:
/// `ID: 2, Name: Gadget, Quantity: 2, Price: $9.99`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Price: ${:.2}",
            self.id, self.name, self.quantity, self.price
        )
    }
}

/// Checks the field invariants every stored record must satisfy.
pub fn validate_fields(name: &str, quantity: i64, price: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::Validation(
            "product name must not be empty".to_string(),
        ));
    }
    if quantity < 0 {
        return Err(InventoryError::Validation(format!(
            "quantity must not be negative (got {})",
            quantity
        )));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(InventoryError::Validation(format!(
            "price must be a non-negative amount (got {})",
            price
        )));
    }
    Ok(())
}

/// Output format for listings and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `ID: .., Name: ..` line per record
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_price_to_two_decimals() {
        let product = Product::new(2, "Gadget", 2, 9.99);
        assert_eq!(
            product.to_string(),
            "ID: 2, Name: Gadget, Quantity: 2, Price: $9.99"
        );

        let product = Product::new(1, "Widget", 10, 2.5);
        assert_eq!(
            product.to_string(),
            "ID: 1, Name: Widget, Quantity: 10, Price: $2.50"
        );
    }

    #[test]
    fn test_validate_fields_accepts_zero_values() {
        validate_fields("Widget", 0, 0.0).unwrap();
    }

    #[test]
    fn test_validate_fields_rejects_blank_name() {
        let err = validate_fields("   ", 1, 1.0).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn test_validate_fields_rejects_negative_quantity() {
        let err = validate_fields("Widget", -1, 1.0).unwrap_err();
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn test_validate_fields_rejects_bad_price() {
        assert!(validate_fields("Widget", 1, -0.01).is_err());
        assert!(validate_fields("Widget", 1, f64::NAN).is_err());
        assert!(validate_fields("Widget", 1, f64::INFINITY).is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("yaml"), None);
    }
}
