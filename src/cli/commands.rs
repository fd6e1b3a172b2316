use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use inventory_tracker::actions;
use inventory_tracker::{
    run_session, InventoryError, LowStockReport, Notice, OutputFormat, Product, ProductStore,
    PromptForm, Result, SqliteStore, TerminalForm, DEFAULT_DB_PATH,
};

#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "Single-user inventory tracker backed by a local SQLite table")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Add a product
    inventory add "Widget" 10 2.50

    # Change only the quantity of product 1
    inventory edit 1 --quantity 4

    # Products with fewer than 5 units in stock
    inventory report 5

    # Full listing as JSON
    inventory list --format json

    # Menu-driven session
    inventory interactive
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the inventory database
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database if it does not exist
    Init,

    /// Add a product
    Add {
        /// Product name
        name: String,

        /// Units in stock
        quantity: i64,

        /// Unit price
        price: f64,
    },

    /// Edit a product; omitted fields keep their current value
    Edit {
        /// Product ID
        id: i64,

        /// New product name
        #[arg(long)]
        name: Option<String>,

        /// New quantity
        #[arg(long)]
        quantity: Option<i64>,

        /// New price
        #[arg(long)]
        price: Option<f64>,
    },

    /// Delete a product
    Delete {
        /// Product ID
        id: i64,
    },

    /// Show a single product
    Show {
        /// Product ID
        id: i64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List all products
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Report products with quantity below a threshold
    Report {
        /// Low stock threshold
        threshold: i64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run the menu-driven form (reads plain lines when stdin is not a terminal)
    Interactive,
}

/// Opens the store and makes sure the product table exists.
fn open_store(db_path: &PathBuf) -> Result<SqliteStore> {
    let store = SqliteStore::new(db_path);
    store.initialize()?;
    Ok(store)
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(format).ok_or_else(|| {
        InventoryError::Validation(format!(
            "unknown format '{}' (expected text or json)",
            format
        ))
    })
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render_product(product: &Product, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(product),
        OutputFormat::Text => Ok(product.to_string()),
    }
}

fn render_products(products: &[Product], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(products),
        OutputFormat::Text if products.is_empty() => Ok("No products in inventory".to_string()),
        OutputFormat::Text => {
            let mut lines: Vec<String> = products.iter().map(|p| p.to_string()).collect();
            lines.push(String::new());
            lines.push(format!("{} product(s)", products.len()));
            Ok(lines.join("\n"))
        }
    }
}

fn render_report(report: &LowStockReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok(Notice::report(report.render()).to_string()),
    }
}

fn print_notice(notice: &Notice) {
    println!("{}", notice);
}

pub fn init_database(db_path: &PathBuf) -> Result<()> {
    let store = open_store(db_path)?;
    println!("Inventory database ready at {}", store.db_path().display());
    Ok(())
}

pub fn add_product(db_path: &PathBuf, name: &str, quantity: i64, price: f64) -> Result<()> {
    let store = open_store(db_path)?;
    let notice = actions::add_product(&store, Some(name), Some(quantity), Some(price))?;
    print_notice(&notice);
    Ok(())
}

pub fn edit_product(
    db_path: &PathBuf,
    id: i64,
    name: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<()> {
    let store = open_store(db_path)?;
    let notice = actions::edit_product(&store, id, name.as_deref(), quantity, price)?;
    print_notice(&notice);
    Ok(())
}

pub fn delete_product(db_path: &PathBuf, id: i64) -> Result<()> {
    let store = open_store(db_path)?;
    let notice = actions::delete_product(&store, id)?;
    print_notice(&notice);
    Ok(())
}

pub fn show_product(db_path: &PathBuf, id: i64, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let store = open_store(db_path)?;
    let product = actions::lookup_product(&store, id)?;
    println!("{}", render_product(&product, format)?);
    Ok(())
}

pub fn list_products(db_path: &PathBuf, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let store = open_store(db_path)?;
    let products = store.list_all()?;
    println!("{}", render_products(&products, format)?);
    Ok(())
}

pub fn low_stock_report(db_path: &PathBuf, threshold: i64, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let store = open_store(db_path)?;
    let report = LowStockReport::collect(&store, threshold)?;
    println!("{}", render_report(&report, format)?);
    Ok(())
}

pub fn interactive(db_path: &PathBuf) -> Result<()> {
    let store = open_store(db_path)?;

    if io::stdin().is_terminal() {
        let mut form = TerminalForm::new();
        return run_session(&store, &mut form);
    }

    tracing::debug!("stdin is not a terminal, reading form answers line by line");
    let stdin = io::stdin();
    let mut form = PromptForm::new(stdin.lock(), io::stdout());
    run_session(&store, &mut form)
}
