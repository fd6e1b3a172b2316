pub mod prompt;
pub mod session;
pub mod terminal;

use crate::actions::Notice;
use crate::error::Result;

pub use prompt::PromptForm;
pub use session::run_session;
pub use terminal::TerminalForm;

/// Actions offered by the inventory form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Edit,
    Delete,
    Report,
    Quit,
}

impl FormAction {
    /// Menu order shown to the operator.
    pub const MENU: [FormAction; 5] = [
        FormAction::Add,
        FormAction::Edit,
        FormAction::Delete,
        FormAction::Report,
        FormAction::Quit,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "add" => Some(FormAction::Add),
            "2" | "edit" => Some(FormAction::Edit),
            "3" | "delete" => Some(FormAction::Delete),
            "4" | "report" => Some(FormAction::Report),
            "q" | "quit" | "exit" => Some(FormAction::Quit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormAction::Add => "Add Product",
            FormAction::Edit => "Edit Product",
            FormAction::Delete => "Delete Product",
            FormAction::Report => "Generate Report",
            FormAction::Quit => "Quit",
        }
    }
}

/// Source of operator input and sink for operator notices.
///
/// `ask_*` return `Ok(None)` when the operator cancels or types something
/// that does not parse. When `initial` is given, an empty answer selects it.
pub trait FormInput {
    /// Next action to run; `None` ends the session.
    fn choose_action(&mut self) -> Result<Option<FormAction>>;

    fn ask_string(&mut self, prompt: &str, initial: Option<&str>) -> Result<Option<String>>;

    fn ask_integer(&mut self, prompt: &str, initial: Option<i64>) -> Result<Option<i64>>;

    fn ask_float(&mut self, prompt: &str, initial: Option<f64>) -> Result<Option<f64>>;

    fn show(&mut self, notice: &Notice) -> Result<()>;
}
