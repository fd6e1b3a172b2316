//! Line-oriented form over a reader/writer pair.
//!
//! Used when stdin is not a terminal (scripted sessions) and in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::actions::Notice;
use crate::error::Result;
use crate::form::{FormAction, FormInput};

pub struct PromptForm<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptForm<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes the prompt and reads one line. `None` on end of input.
    fn read_answer(&mut self, prompt: &str, initial: Option<String>) -> Result<Option<String>> {
        match &initial {
            Some(value) => write!(self.writer, "{} [{}] ", prompt, value)?,
            None => write!(self.writer, "{} ", prompt)?,
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(initial);
        }
        Ok(Some(answer.to_string()))
    }

    fn ask_parsed<T>(&mut self, prompt: &str, initial: Option<T>) -> Result<Option<T>>
    where
        T: FromStr + ToString,
    {
        let answer = self.read_answer(prompt, initial.map(|v| v.to_string()))?;
        Ok(answer.and_then(|a| a.parse().ok()))
    }
}

impl<R: BufRead, W: Write> FormInput for PromptForm<R, W> {
    fn choose_action(&mut self) -> Result<Option<FormAction>> {
        loop {
            writeln!(self.writer)?;
            for (idx, action) in FormAction::MENU.iter().enumerate() {
                match action {
                    FormAction::Quit => writeln!(self.writer, "  q) {}", action.label())?,
                    _ => writeln!(self.writer, "  {}) {}", idx + 1, action.label())?,
                }
            }

            let Some(answer) = self.read_answer("Choose an action:", None)? else {
                return Ok(None);
            };
            match FormAction::from_str(&answer) {
                Some(action) => return Ok(Some(action)),
                None => writeln!(self.writer, "Unknown choice: {}", answer)?,
            }
        }
    }

    fn ask_string(&mut self, prompt: &str, initial: Option<&str>) -> Result<Option<String>> {
        self.read_answer(prompt, initial.map(str::to_string))
    }

    fn ask_integer(&mut self, prompt: &str, initial: Option<i64>) -> Result<Option<i64>> {
        self.ask_parsed(prompt, initial)
    }

    fn ask_float(&mut self, prompt: &str, initial: Option<f64>) -> Result<Option<f64>> {
        self.ask_parsed(prompt, initial)
    }

    fn show(&mut self, notice: &Notice) -> Result<()> {
        writeln!(self.writer, "{}", notice)?;
        Ok(())
    }
}
