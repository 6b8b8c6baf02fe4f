//! Interactive terminal dialog.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::io::Write;

use crate::error::{GateError, Result};

use super::{DialogChoice, GateTheme, MessageBox};

fn map_dialoguer_err(e: dialoguer::Error) -> GateError {
    GateError::Prompt {
        message: e.to_string(),
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Yes/no dialog on the terminal. Defaults to No.
pub struct TerminalDialog {
    term: Term,
    theme: GateTheme,
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: GateTheme::detect(),
        }
    }

    fn confirm(&mut self, body: &str, title: &str) -> Result<bool> {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title))?;

        // The last paragraph is the question the prompt answers.
        let (text, question) = match body.rsplit_once("\n\n") {
            Some((text, question)) => (text, question),
            None => ("", body),
        };
        if !text.is_empty() {
            writeln!(self.term, "{}\n", text)?;
        }

        Confirm::with_theme(&prompt_theme())
            .with_prompt(question)
            .default(false)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }
}

impl MessageBox for TerminalDialog {
    fn prompt_yes_no(&mut self, body: &str, title: &str) -> DialogChoice {
        match self.confirm(body, title) {
            Ok(answer) => DialogChoice::from(answer),
            Err(e) => {
                tracing::warn!("Dialog failed, answering no: {}", e);
                DialogChoice::No
            }
        }
    }
}
