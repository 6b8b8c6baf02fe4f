//! Process termination.

use std::io::Write;

use super::ProcessExit;

/// Exit code when the adapter lacks required features.
pub const EXIT_REQUIREMENTS_MISSING: i32 = 3;

/// Ends the process with [`EXIT_REQUIREMENTS_MISSING`].
#[derive(Debug, Default)]
pub struct SystemExit;

impl SystemExit {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessExit for SystemExit {
    fn request_exit(&mut self, immediate: bool, reason: &str) {
        tracing::info!(reason, immediate, "exiting");
        std::io::stdout().flush().ok();
        std::io::stderr().flush().ok();
        std::process::exit(EXIT_REQUIREMENTS_MISSING);
    }
}
