//! Dialog for CI/headless environments.

use console::Term;
use std::io::Write;

use super::{DialogChoice, GateTheme, MessageBox};

/// Writes the dialog to stderr and answers No without waiting.
pub struct NonInteractiveDialog {
    term: Term,
    theme: GateTheme,
}

impl Default for NonInteractiveDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl NonInteractiveDialog {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: GateTheme::detect(),
        }
    }

    /// Text written for a dialog.
    pub fn render(&self, body: &str, title: &str) -> String {
        format!(
            "{}\n\n{}\n{}",
            self.theme.format_header(title),
            body,
            self.theme.dim.apply_to("(non-interactive: answering no)")
        )
    }
}

impl MessageBox for NonInteractiveDialog {
    fn prompt_yes_no(&mut self, body: &str, title: &str) -> DialogChoice {
        writeln!(self.term, "{}", self.render(body, title)).ok();
        DialogChoice::No
    }
}
