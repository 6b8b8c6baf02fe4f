//! Configuration keys and user-facing strings.

use super::source::ConfigSource;

/// Section holding the renderer toggles.
pub const RENDERER_SECTION: &str = "renderer";

/// Section holding the gate's own settings.
pub const GATE_SECTION: &str = "gpu_gate";

/// Geometry virtualization (Nanite-style) toggle.
pub const KEY_NANITE: &str = "r.Nanite";

/// Virtual shadow map toggle.
pub const KEY_VIRTUAL_SHADOWS: &str = "r.Shadow.Virtual.Enable";

/// Hardware ray tracing toggle.
pub const KEY_RAY_TRACING: &str = "r.RayTracing";

/// Development-only switch that forces the failure path.
pub const KEY_SIMULATE_FAILURE: &str = "simulate_failure";

pub const KEY_PROBLEM_MESSAGE: &str = "problem_message";
pub const KEY_QUESTION_MESSAGE: &str = "question_message";
pub const KEY_ERROR_TITLE: &str = "error_title";
pub const KEY_HELP_URL: &str = "help_url";

pub const DEFAULT_PROBLEM_MESSAGE: &str =
    "Your graphics card does not support the required features for this game.";
pub const DEFAULT_QUESTION_MESSAGE: &str = "Would you like to learn more?";
pub const DEFAULT_ERROR_TITLE: &str = "Incompatible Hardware";
pub const DEFAULT_HELP_URL: &str = "https://example.com/";

/// Strings shown in the deficiency dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateMessages {
    /// First paragraph of the dialog body.
    pub problem: String,
    /// Closing question; the dialog's Yes/No answers it.
    pub question: String,
    /// Dialog title.
    pub title: String,
    /// Base help link. Empty disables the link.
    pub help_url: String,
}

impl Default for GateMessages {
    fn default() -> Self {
        Self {
            problem: DEFAULT_PROBLEM_MESSAGE.to_string(),
            question: DEFAULT_QUESTION_MESSAGE.to_string(),
            title: DEFAULT_ERROR_TITLE.to_string(),
            help_url: DEFAULT_HELP_URL.to_string(),
        }
    }
}

impl GateMessages {
    /// Read the strings from `config`, keeping the built-in default for
    /// anything missing. `None` yields all defaults.
    pub fn from_config(config: Option<&dyn ConfigSource>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        Self {
            problem: config.get_string_or(GATE_SECTION, KEY_PROBLEM_MESSAGE, &defaults.problem),
            question: config.get_string_or(
                GATE_SECTION,
                KEY_QUESTION_MESSAGE,
                &defaults.question,
            ),
            title: config.get_string_or(GATE_SECTION, KEY_ERROR_TITLE, &defaults.title),
            help_url: config.get_string_or(GATE_SECTION, KEY_HELP_URL, &defaults.help_url),
        }
    }
}
