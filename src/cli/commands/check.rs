//! Check command implementation.
//!
//! `gpu-gate check` runs the startup gate exactly as a game would at launch.

use std::io::Write;

use crate::error::Result;
use crate::gate::{run_startup_check, GateContext, GateOutcome};
use crate::ui::{create_dialog, DialogKind, GateTheme, EXIT_REQUIREMENTS_MISSING};

use super::dispatcher::{Command, CommandResult, ConfigLocation};

/// The check command implementation.
pub struct CheckCommand {
    location: ConfigLocation,
    dialog: DialogKind,
}

impl CheckCommand {
    pub fn new(location: ConfigLocation, dialog: DialogKind) -> Self {
        Self { location, dialog }
    }

    /// Context with this platform's backend and host.
    fn context(&self) -> GateContext {
        let ctx = GateContext::for_platform().with_dialog(create_dialog(self.dialog));
        match self.location.load() {
            Some(config) => ctx.with_config(Box::new(config)),
            None => ctx,
        }
    }

    /// Run the gate with an explicit context.
    pub fn run(&self, ctx: &mut GateContext, out: &mut dyn Write) -> Result<CommandResult> {
        let theme = GateTheme::detect();
        match run_startup_check(ctx) {
            GateOutcome::Passed { required, .. } => {
                writeln!(
                    out,
                    "{}",
                    theme.format_success(&format!(
                        "All required graphics features are supported ({})",
                        required
                    ))
                )?;
                Ok(CommandResult::success())
            }
            GateOutcome::Failed { report, .. } => {
                writeln!(
                    out,
                    "{}",
                    theme.format_error(&format!("Missing graphics features: {}", report.missing))
                )?;
                Ok(CommandResult::failure(EXIT_REQUIREMENTS_MISSING))
            }
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut ctx = self.context();
        self.run(&mut ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildMode, MapConfig};
    use crate::device::{MockDevice, MockDeviceProvider};
    use crate::ui::MockHost;
    use std::path::PathBuf;

    fn command() -> CheckCommand {
        CheckCommand::new(
            ConfigLocation {
                project_root: PathBuf::from("."),
                config_override: None,
            },
            DialogKind::Headless,
        )
    }

    #[test]
    fn passing_check_succeeds() {
        let host = MockHost::new();
        let mut ctx = GateContext::new(Box::new(MockDeviceProvider::with_device(
            MockDevice::baseline(),
        )))
        .with_mode(BuildMode::Development)
        .with_host(&host);
        let mut out = Vec::new();

        let result = command().run(&mut ctx, &mut out).unwrap();

        assert!(result.success);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("supported (dx12)"));
    }

    #[test]
    fn failing_check_reports_missing_features() {
        let host = MockHost::new();
        let mut ctx = GateContext::new(Box::new(MockDeviceProvider::with_device(
            MockDevice::baseline(),
        )))
        .with_mode(BuildMode::Development)
        .with_config(Box::new(MapConfig::new().with("renderer", "r.RayTracing", 1)))
        .with_host(&host);
        let mut out = Vec::new();

        let result = command().run(&mut ctx, &mut out).unwrap();

        assert_eq!(result.exit_code, EXIT_REQUIREMENTS_MISSING);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("raytracing"));
        assert_eq!(host.exits().len(), 1);
    }
}
