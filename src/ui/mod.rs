//! Host collaborators: dialog, URL launcher and process exit.
//!
//! This module provides:
//! - [`MessageBox`], [`UrlLauncher`] and [`ProcessExit`] traits the gate
//!   reports through
//! - [`TerminalDialog`] for interactive terminals
//! - [`NonInteractiveDialog`] for CI/headless environments
//! - `NativeDialog` (Windows) showing a Win32 message box
//! - [`SystemLauncher`] and [`SystemExit`] for real runs
//! - [`MockHost`] recording every interaction for tests
//!
//! # Example
//!
//! ```
//! use gpu_gate::ui::{DialogChoice, MessageBox, MockHost, ProcessExit};
//!
//! let mut host = MockHost::answering(DialogChoice::Yes);
//! assert_eq!(host.prompt_yes_no("body", "title"), DialogChoice::Yes);
//! host.request_exit(true, "done");
//! assert_eq!(host.exits(), vec![(true, "done".to_string())]);
//! ```

pub mod exit;
pub mod launcher;
pub mod mock;
#[cfg(windows)]
pub mod native;
pub mod non_interactive;
pub mod terminal;
pub mod theme;

pub use exit::{SystemExit, EXIT_REQUIREMENTS_MISSING};
pub use launcher::{open_url, SystemLauncher};
pub use mock::MockHost;
#[cfg(windows)]
pub use native::NativeDialog;
pub use non_interactive::NonInteractiveDialog;
pub use terminal::TerminalDialog;
pub use theme::{should_use_colors, GateTheme};

/// Answer to a yes/no dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Yes,
    No,
}

impl DialogChoice {
    pub fn is_yes(self) -> bool {
        self == DialogChoice::Yes
    }
}

impl From<bool> for DialogChoice {
    fn from(yes: bool) -> Self {
        if yes {
            DialogChoice::Yes
        } else {
            DialogChoice::No
        }
    }
}

/// Blocking yes/no dialog.
pub trait MessageBox {
    /// Show `body` under `title` and wait for an answer.
    fn prompt_yes_no(&mut self, body: &str, title: &str) -> DialogChoice;
}

/// Opens a URL in the user's browser. Fire and forget.
pub trait UrlLauncher {
    fn open_url(&mut self, url: &str);
}

/// Ends the process.
pub trait ProcessExit {
    /// Request termination, tagged with `reason`.
    ///
    /// Real implementations do not return.
    fn request_exit(&mut self, immediate: bool, reason: &str);
}

/// Which dialog implementation a run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Platform message box. Needs no console.
    Native,
    /// dialoguer prompt on the attached terminal.
    Terminal,
    /// Report to stderr and answer No.
    Headless,
}

impl DialogKind {
    /// Choose the dialog for this process.
    pub fn detect(non_interactive: bool) -> Self {
        dialog_kind(
            non_interactive,
            is_ci(),
            console::Term::stderr().is_term(),
            cfg!(windows),
        )
    }
}

/// Pick a dialog from the environment.
///
/// The native message box does not depend on a terminal, so a GUI process
/// without a console still gets it. Only an explicit `--non-interactive` or a
/// CI run suppresses it.
pub fn dialog_kind(
    non_interactive: bool,
    ci: bool,
    stderr_is_term: bool,
    native_available: bool,
) -> DialogKind {
    if non_interactive || ci {
        DialogKind::Headless
    } else if native_available {
        DialogKind::Native
    } else if stderr_is_term {
        DialogKind::Terminal
    } else {
        DialogKind::Headless
    }
}

/// Check if running under a CI service.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Create the dialog for `kind`.
///
/// `Native` falls back to the terminal prompt where no platform message box
/// exists.
pub fn create_dialog(kind: DialogKind) -> Box<dyn MessageBox> {
    match kind {
        DialogKind::Headless => Box::new(NonInteractiveDialog::new()),
        #[cfg(windows)]
        DialogKind::Native => Box::new(NativeDialog::new()),
        #[cfg(not(windows))]
        DialogKind::Native => Box::new(TerminalDialog::new()),
        DialogKind::Terminal => Box::new(TerminalDialog::new()),
    }
}
