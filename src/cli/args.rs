//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gpu-gate - Refuse to start on graphics hardware the renderer can't use.
#[derive(Debug, Parser)]
#[command(name = "gpu-gate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .gpugate/config.yml)
    #[arg(short, long, global = true, env = "GPU_GATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Never wait for input; dialogs answer no
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the startup check (default if no command specified)
    Check,

    /// Show which features the default adapter supports
    Detect(DetectArgs),

    /// Show which features the configuration requires
    Required(RequiredArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `required` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RequiredArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["gpu-gate"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn detect_json_parses() {
        let cli = Cli::try_parse_from(["gpu-gate", "detect", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Detect(DetectArgs { json: true }))));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gpu-gate",
            "required",
            "--project",
            "/tmp/game",
            "--non-interactive",
        ])
        .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/game")));
        assert!(cli.non_interactive);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["gpu-gate", "install"]).is_err());
    }
}
