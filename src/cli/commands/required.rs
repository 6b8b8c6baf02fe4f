//! Required command implementation.
//!
//! `gpu-gate required` shows the features the configured renderer needs.

use serde::Serialize;
use std::io::Write;

use crate::cli::args::RequiredArgs;
use crate::config::{BuildMode, ConfigSource};
use crate::error::{GateError, Result};
use crate::features::FeatureSet;
use crate::requirements::compute_required_features;

use super::dispatcher::{Command, CommandResult, ConfigLocation};

#[derive(Debug, Serialize)]
struct RequiredReport {
    mode: String,
    config_found: bool,
    required: FeatureSet,
}

/// The required command implementation.
pub struct RequiredCommand {
    location: ConfigLocation,
    args: RequiredArgs,
    mode: BuildMode,
}

impl RequiredCommand {
    pub fn new(location: ConfigLocation, args: RequiredArgs) -> Self {
        Self {
            location,
            args,
            mode: BuildMode::current(),
        }
    }

    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Command for RequiredCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = self.location.load();
        let required = compute_required_features(
            config.as_ref().map(|c| c as &dyn ConfigSource),
            self.mode,
        );

        if self.args.json {
            let report = RequiredReport {
                mode: self.mode.to_string(),
                config_found: config.is_some(),
                required,
            };
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| GateError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
        } else {
            if config.is_none() {
                writeln!(out, "No configuration found; baseline only.")?;
            }
            for feature in required.iter() {
                writeln!(out, "• {} ({})", feature.name(), feature.slug())?;
            }
        }

        Ok(CommandResult::success())
    }
}
