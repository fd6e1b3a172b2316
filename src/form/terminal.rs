//! Interactive form on the operator's terminal, built on dialoguer.

use dialoguer::{Input, Select};

use crate::actions::Notice;
use crate::error::Result;
use crate::form::{FormAction, FormInput};

#[derive(Debug, Default)]
pub struct TerminalForm;

impl TerminalForm {
    pub fn new() -> Self {
        Self
    }
}

fn menu_labels() -> Vec<&'static str> {
    FormAction::MENU.iter().map(FormAction::label).collect()
}

/// Maps a menu selection to an action; Esc/q (no selection) quits.
fn action_for_selection(selection: Option<usize>) -> FormAction {
    selection
        .and_then(|idx| FormAction::MENU.get(idx).copied())
        .unwrap_or(FormAction::Quit)
}

fn non_empty(answer: String) -> Option<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}

impl FormInput for TerminalForm {
    fn choose_action(&mut self) -> Result<Option<FormAction>> {
        let selection = Select::new()
            .with_prompt("Choose an action")
            .items(&menu_labels())
            .default(0)
            .interact_opt()?;

        Ok(Some(action_for_selection(selection)))
    }

    fn ask_string(&mut self, prompt: &str, initial: Option<&str>) -> Result<Option<String>> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(value) = initial {
            input = input.default(value.to_string());
        }

        let answer = input.interact_text()?;
        Ok(non_empty(answer))
    }

    fn ask_integer(&mut self, prompt: &str, initial: Option<i64>) -> Result<Option<i64>> {
        let mut input = Input::<i64>::new().with_prompt(prompt);
        if let Some(value) = initial {
            input = input.default(value);
        }

        Ok(Some(input.interact_text()?))
    }

    fn ask_float(&mut self, prompt: &str, initial: Option<f64>) -> Result<Option<f64>> {
        let mut input = Input::<f64>::new().with_prompt(prompt);
        if let Some(value) = initial {
            input = input.default(value);
        }

        Ok(Some(input.interact_text()?))
    }

    fn show(&mut self, notice: &Notice) -> Result<()> {
        println!("{}", notice);
        Ok(())
    }
}
