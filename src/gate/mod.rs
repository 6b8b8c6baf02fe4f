//! The startup gate.
//!
//! [`run_startup_check`] resolves what the configured renderer needs,
//! detects what the default adapter supports, and either lets startup
//! continue or reports the deficiency and ends the process.
//!
//! # Example
//!
//! ```
//! use gpu_gate::config::{BuildMode, MapConfig};
//! use gpu_gate::device::{MockDevice, MockDeviceProvider};
//! use gpu_gate::gate::{run_startup_check, GateContext, REQUIRED_FEATURES_MISSING_REASON};
//! use gpu_gate::ui::MockHost;
//!
//! let config = MapConfig::new().with("renderer", "r.RayTracing", 1);
//! let host = MockHost::new();
//! let provider = MockDeviceProvider::with_device(MockDevice::baseline());
//! let mut ctx = GateContext::new(Box::new(provider))
//!     .with_config(Box::new(config))
//!     .with_mode(BuildMode::Development)
//!     .with_host(&host);
//!
//! let outcome = run_startup_check(&mut ctx);
//! assert!(!outcome.passed());
//! assert_eq!(host.exits()[0].1, REQUIRED_FEATURES_MISSING_REASON);
//! ```

pub mod report;

pub use report::{compose_message, format_missing_list, format_query, DeficiencyReport};

use crate::config::{BuildMode, ConfigSource, GateMessages};
use crate::device::{default_provider, detect_hardware_features, DeviceProvider, FeatureLevel};
use crate::features::FeatureSet;
use crate::requirements::compute_required_features;
use crate::ui::{
    create_dialog, DialogChoice, DialogKind, MessageBox, ProcessExit, SystemExit, SystemLauncher,
    UrlLauncher,
};

/// Reason attached to the exit request when features are missing.
pub const REQUIRED_FEATURES_MISSING_REASON: &str = "GpuGate.RequiredFeaturesMissing";

/// True when every required feature was detected.
pub fn passes(required: FeatureSet, detected: FeatureSet) -> bool {
    required.is_subset_of(detected)
}

/// Result of a startup check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Startup may continue.
    Passed {
        required: FeatureSet,
        detected: FeatureSet,
    },
    /// Features were missing; the user was told and exit was requested.
    ///
    /// Only observed when the exit collaborator returns.
    Failed {
        report: DeficiencyReport,
        choice: DialogChoice,
    },
}

impl GateOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, GateOutcome::Passed { .. })
    }
}

/// Inputs and collaborators for one startup check.
pub struct GateContext {
    pub config: Option<Box<dyn ConfigSource>>,
    pub mode: BuildMode,
    pub messages: GateMessages,
    pub provider: Box<dyn DeviceProvider>,
    pub dialog: Box<dyn MessageBox>,
    pub launcher: Box<dyn UrlLauncher>,
    pub exit: Box<dyn ProcessExit>,
    explicit_messages: bool,
}

impl GateContext {
    /// Context with no configuration, default messages, the current build
    /// mode and the real host collaborators.
    pub fn new(provider: Box<dyn DeviceProvider>) -> Self {
        Self {
            config: None,
            mode: BuildMode::current(),
            messages: GateMessages::default(),
            provider,
            dialog: create_dialog(DialogKind::detect(false)),
            launcher: Box::new(SystemLauncher::new()),
            exit: Box::new(SystemExit::new()),
            explicit_messages: false,
        }
    }

    /// Context for this platform's graphics backend.
    pub fn for_platform() -> Self {
        Self::new(default_provider())
    }

    /// Use `config` for toggles and dialog strings.
    ///
    /// Messages set with [`GateContext::with_messages`] take precedence over
    /// the configured strings, whichever builder runs first.
    pub fn with_config(mut self, config: Box<dyn ConfigSource>) -> Self {
        if !self.explicit_messages {
            self.messages = GateMessages::from_config(Some(config.as_ref()));
        }
        self.config = Some(config);
        self
    }

    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_messages(mut self, messages: GateMessages) -> Self {
        self.messages = messages;
        self.explicit_messages = true;
        self
    }

    pub fn with_dialog(mut self, dialog: Box<dyn MessageBox>) -> Self {
        self.dialog = dialog;
        self
    }

    pub fn with_launcher(mut self, launcher: Box<dyn UrlLauncher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_exit(mut self, exit: Box<dyn ProcessExit>) -> Self {
        self.exit = exit;
        self
    }

    /// Install one host as dialog, launcher and exit.
    pub fn with_host<H>(self, host: &H) -> Self
    where
        H: MessageBox + UrlLauncher + ProcessExit + Clone + 'static,
    {
        self.with_dialog(Box::new(host.clone()))
            .with_launcher(Box::new(host.clone()))
            .with_exit(Box::new(host.clone()))
    }

    /// Features the configured renderer needs.
    pub fn required_features(&self) -> FeatureSet {
        compute_required_features(self.config.as_deref(), self.mode)
    }
}

/// Open the default adapter and detect its features.
///
/// A device that cannot be created supports nothing. The handle is released
/// before this returns.
pub fn detect_features(provider: &dyn DeviceProvider) -> FeatureSet {
    let device = match provider.create_device(FeatureLevel::GATE_MINIMUM) {
        Ok(device) => device,
        Err(e) => {
            tracing::warn!("No usable graphics device: {}", e);
            return FeatureSet::empty();
        }
    };

    if let Some(name) = device.adapter_name() {
        tracing::debug!(adapter = %name, "device created");
    }

    detect_hardware_features(device.as_ref())
}

/// Run the startup check once.
pub fn run_startup_check(ctx: &mut GateContext) -> GateOutcome {
    let required = ctx.required_features();
    tracing::debug!(%required, mode = %ctx.mode, "resolved requirements");
    enforce(ctx, required)
}

/// Check `required` against the adapter and report any deficiency.
pub fn enforce(ctx: &mut GateContext, required: FeatureSet) -> GateOutcome {
    if required.is_empty() {
        tracing::debug!("nothing required, skipping device checks");
        return GateOutcome::Passed {
            required,
            detected: FeatureSet::empty(),
        };
    }

    let detected = detect_features(ctx.provider.as_ref());
    tracing::debug!(%detected, "detected features");

    if passes(required, detected) {
        tracing::info!(%required, "graphics requirements met");
        return GateOutcome::Passed { required, detected };
    }

    let report = DeficiencyReport::build(required, detected, &ctx.messages);
    tracing::warn!(missing = %report.missing, "required graphics features missing");

    let choice = ctx.dialog.prompt_yes_no(&report.message, &report.title);
    if choice.is_yes() {
        if let Some(url) = &report.help_url {
            ctx.launcher.open_url(url);
        }
    }

    ctx.exit.request_exit(true, REQUIRED_FEATURES_MISSING_REASON);

    GateOutcome::Failed { report, choice }
}
