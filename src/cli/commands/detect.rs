//! Detect command implementation.
//!
//! `gpu-gate detect` opens the default adapter and lists which features it
//! supports, without checking them against any configuration.

use serde::Serialize;
use std::io::Write;

use crate::cli::args::DetectArgs;
use crate::device::{default_provider, detect_hardware_features, DeviceProvider, FeatureLevel};
use crate::error::{GateError, Result};
use crate::features::{FeatureSet, HardwareFeature};
use crate::ui::GateTheme;

use super::dispatcher::{Command, CommandResult};

/// JSON shape of a detection report.
#[derive(Debug, Serialize)]
struct DetectReport {
    adapter: Option<String>,
    device_created: bool,
    detected: FeatureSet,
    features: Vec<FeatureStatus>,
}

#[derive(Debug, Serialize)]
struct FeatureStatus {
    feature: HardwareFeature,
    name: &'static str,
    supported: bool,
}

/// The detect command implementation.
pub struct DetectCommand {
    args: DetectArgs,
    provider: Box<dyn DeviceProvider>,
}

impl DetectCommand {
    pub fn new(args: DetectArgs) -> Self {
        Self::with_provider(args, default_provider())
    }

    pub fn with_provider(args: DetectArgs, provider: Box<dyn DeviceProvider>) -> Self {
        Self { args, provider }
    }

    fn report(&self) -> DetectReport {
        let (adapter, device_created, detected) =
            match self.provider.create_device(FeatureLevel::GATE_MINIMUM) {
                Ok(device) => (
                    device.adapter_name(),
                    true,
                    detect_hardware_features(device.as_ref()),
                ),
                Err(e) => {
                    tracing::warn!("No usable graphics device: {}", e);
                    (None, false, FeatureSet::empty())
                }
            };

        let features = HardwareFeature::ALL
            .into_iter()
            .filter(|f| *f != HardwareFeature::SimulatedFailure)
            .map(|feature| FeatureStatus {
                feature,
                name: feature.name(),
                supported: detected.has(feature),
            })
            .collect();

        DetectReport {
            adapter,
            device_created,
            detected,
            features,
        }
    }
}

impl Command for DetectCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let report = self.report();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| GateError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
        } else {
            let theme = GateTheme::detect();
            if let Some(adapter) = &report.adapter {
                writeln!(out, "{} {}", theme.highlight.apply_to("Adapter:"), adapter)?;
            }
            if !report.device_created {
                writeln!(
                    out,
                    "{}",
                    theme.format_warning("Could not create a Direct3D 12 device")
                )?;
            }
            for status in &report.features {
                let line = if status.supported {
                    theme.format_success(status.name)
                } else {
                    theme.format_error(status.name)
                };
                writeln!(out, "{}", line)?;
            }
        }

        if report.device_created {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
