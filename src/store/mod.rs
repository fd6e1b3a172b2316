pub mod models;
pub mod sqlite;

use crate::error::Result;
pub use models::*;

/// Record operations over the product table.
///
/// Implementations own persistence entirely; callers only see [`Product`]
/// values and row-affected outcomes.
pub trait ProductStore {
    /// Creates the backing table if it does not exist. Safe to call on every startup.
    fn initialize(&self) -> Result<()>;

    /// Inserts a new record and returns the id assigned by the store.
    fn create(&self, name: &str, quantity: i64, price: f64) -> Result<i64>;

    /// Replaces name, quantity and price of the record with `id`.
    ///
    /// Returns `false` when no record has that id; nothing is inserted in that case.
    fn update(&self, id: i64, name: &str, quantity: i64, price: f64) -> Result<bool>;

    /// Removes the record with `id`, returning `false` if there was none.
    fn delete(&self, id: i64) -> Result<bool>;

    fn get(&self, id: i64) -> Result<Option<Product>>;

    /// All records, ordered by id.
    fn list_all(&self) -> Result<Vec<Product>>;

    /// Records whose quantity is strictly less than `threshold`, ordered by id.
    fn list_below(&self, threshold: i64) -> Result<Vec<Product>>;
}
