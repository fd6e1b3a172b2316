use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),
}

impl InventoryError {
    /// Errors the operator can fix by retrying with different input.
    pub fn is_operator_error(&self) -> bool {
        matches!(
            self,
            InventoryError::Validation(_) | InventoryError::ProductNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
