//! Opening help links in the browser.

use console::Term;
use std::io::Write;

use super::{GateTheme, UrlLauncher};

/// Open a URL in the default browser.
pub fn open_url(url: &str) -> anyhow::Result<()> {
    open::that(url).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open URL. You can open it manually:\n  {}\n\nError: {}",
            url,
            e
        )
    })
}

/// Launches URLs with the system handler. Failures are reported, never fatal.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl UrlLauncher for SystemLauncher {
    fn open_url(&mut self, url: &str) {
        tracing::debug!(url, "opening help link");
        if let Err(e) = open_url(url) {
            tracing::warn!("{}", e);
            let theme = GateTheme::detect();
            writeln!(Term::stderr(), "{}", theme.hint.apply_to(e.to_string())).ok();
        }
    }
}
