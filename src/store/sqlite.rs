use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::error::Result;
use crate::store::{validate_fields, Product, ProductStore};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "inventory.db";

/// SQLite-backed product store.
///
/// Holds only the database path. Each operation opens its own connection
/// and drops it before returning, so nothing is cached between calls and
/// every call sees the current file contents.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens an existing database. Only [`ProductStore::initialize`] creates the file.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    fn product_from_row(row: &rusqlite::Row) -> rusqlite::Result<Product> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            quantity: row.get(2)?,
            price: row.get(3)?,
        })
    }
}

impl ProductStore for SqliteStore {
    fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                price REAL NOT NULL
            );
            "#,
        )?;
        tracing::debug!("Initialized product table at {}", self.db_path.display());
        Ok(())
    }

    fn create(&self, name: &str, quantity: i64, price: f64) -> Result<i64> {
        validate_fields(name, quantity, price)?;

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO products (name, quantity, price) VALUES (?1, ?2, ?3)",
            params![name, quantity, price],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!("Inserted product {} ({})", id, name);
        Ok(id)
    }

    fn update(&self, id: i64, name: &str, quantity: i64, price: f64) -> Result<bool> {
        validate_fields(name, quantity, price)?;

        let conn = self.connect()?;
        let affected = conn.execute(
            "UPDATE products SET name = ?1, quantity = ?2, price = ?3 WHERE id = ?4",
            params![name, quantity, price, id],
        )?;
        tracing::debug!("Updated product {}: {} row(s) affected", id, affected);
        Ok(affected > 0)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        tracing::debug!("Deleted product {}: {} row(s) affected", id, affected);
        Ok(affected > 0)
    }

    fn get(&self, id: i64) -> Result<Option<Product>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, name, quantity, price FROM products WHERE id = ?1")?;

        let product = stmt
            .query_row(params![id], Self::product_from_row)
            .optional()?;

        Ok(product)
    }

    fn list_all(&self) -> Result<Vec<Product>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name, quantity, price FROM products ORDER BY id")?;

        let products = stmt
            .query_map([], Self::product_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(products)
    }

    fn list_below(&self, threshold: i64) -> Result<Vec<Product>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, quantity, price
            FROM products
            WHERE quantity < ?1
            ORDER BY id
            "#,
        )?;

        let products = stmt
            .query_map(params![threshold], Self::product_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("{} product(s) below threshold {}", products.len(), threshold);
        Ok(products)
    }
}
