//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config_or_default, YamlConfig};
use crate::error::Result;
use crate::ui::DialogKind;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where configuration comes from for a run.
#[derive(Debug, Clone)]
pub struct ConfigLocation {
    pub project_root: PathBuf,
    pub config_override: Option<PathBuf>,
}

impl ConfigLocation {
    /// Load the configuration, treating unreadable files as absent.
    pub fn load(&self) -> Option<YamlConfig> {
        load_config_or_default(&self.project_root, self.config_override.as_deref())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    location: ConfigLocation,
    dialog: DialogKind,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            location: ConfigLocation {
                project_root,
                config_override: None,
            },
            dialog: DialogKind::Headless,
        }
    }

    /// Load configuration from `path` instead of the project's files.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.location.config_override = path;
        self
    }

    /// Dialog used by `check` when features are missing.
    pub fn with_dialog(mut self, dialog: DialogKind) -> Self {
        self.dialog = dialog;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.location.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand runs `check`.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Detect(args)) => {
                let cmd = super::detect::DetectCommand::new(args.clone());
                cmd.execute(out)
            }
            Some(Commands::Required(args)) => {
                let cmd =
                    super::required::RequiredCommand::new(self.location.clone(), args.clone());
                cmd.execute(out)
            }
            Some(Commands::Check) | None => {
                let cmd = super::check::CheckCommand::new(self.location.clone(), self.dialog);
                cmd.execute(out)
            }
        }
    }
}
