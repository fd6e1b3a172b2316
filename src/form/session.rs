use crate::actions::{self, Notice, PRODUCT_NOT_FOUND};
use crate::error::{InventoryError, Result};
use crate::form::{FormAction, FormInput};
use crate::store::ProductStore;

/// Runs form actions until the operator quits or input ends.
///
/// Operator mistakes and storage failures are shown as notices and the
/// session continues. Only failures of the form itself end it early.
pub fn run_session(store: &impl ProductStore, form: &mut impl FormInput) -> Result<()> {
    while let Some(action) = form.choose_action()? {
        let notice = match perform(store, form, action) {
            Ok(notice) => notice,
            Err(err @ (InventoryError::Io(_) | InventoryError::Prompt(_))) => return Err(err),
            Err(err) => match Notice::from_operator_error(&err) {
                Some(warning) => warning,
                None => {
                    tracing::error!("{} failed: {}", action.label(), err);
                    Notice::error(err.to_string())
                }
            },
        };
        form.show(&notice)?;

        if action == FormAction::Quit {
            break;
        }
    }
    Ok(())
}

fn perform(
    store: &impl ProductStore,
    form: &mut impl FormInput,
    action: FormAction,
) -> Result<Notice> {
    match action {
        FormAction::Add => {
            let name = form.ask_string("Product Name:", None)?;
            let quantity = form.ask_integer("Quantity:", None)?;
            let price = form.ask_float("Price:", None)?;
            actions::add_product(store, name.as_deref(), quantity, price)
        }
        FormAction::Edit => {
            let Some(id) = form.ask_integer("Enter Product ID to Edit:", None)? else {
                return Ok(Notice::warning(PRODUCT_NOT_FOUND));
            };
            let current = actions::lookup_product(store, id)?;

            let name = form.ask_string("New Product Name:", Some(current.name.as_str()))?;
            let quantity = form.ask_integer("New Quantity:", Some(current.quantity))?;
            let price = form.ask_float("New Price:", Some(current.price))?;

            let name = require(name, "product name")?;
            let quantity = require(quantity, "quantity")?;
            let price = require(price, "price")?;
            actions::edit_product(store, id, Some(name.as_str()), Some(quantity), Some(price))
        }
        FormAction::Delete => {
            let id = require(
                form.ask_integer("Enter Product ID to Delete:", None)?,
                "product id",
            )?;
            actions::delete_product(store, id)
        }
        FormAction::Report => {
            let threshold = require(
                form.ask_integer("Low Stock Threshold:", None)?,
                "threshold",
            )?;
            actions::low_stock_report(store, threshold)
        }
        FormAction::Quit => Ok(Notice::info("Goodbye")),
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| InventoryError::Validation(format!("{} is required", field)))
}
