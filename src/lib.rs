pub mod actions;
pub mod error;
pub mod form;
pub mod report;
pub mod store;

pub use actions::{Notice, NoticeLevel};
pub use error::{InventoryError, Result};
pub use form::{run_session, FormAction, FormInput, PromptForm, TerminalForm};
pub use report::{generate_low_stock_report, LowStockReport, NO_LOW_STOCK_MESSAGE};
pub use store::sqlite::{SqliteStore, DEFAULT_DB_PATH};
pub use store::{validate_fields, OutputFormat, Product, ProductStore};
