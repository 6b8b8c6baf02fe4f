//! Visual theme and styling.

use console::Style;

/// Terminal styles for dialogs and command output.
#[derive(Debug, Clone)]
pub struct GateTheme {
    /// Style for supported features (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for missing features (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for dialog titles (yellow bold).
    pub header: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for GateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GateTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().yellow(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick [`GateTheme::new`] or [`GateTheme::plain`] for the current
    /// terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a dialog title banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("⚠ {}", title)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = GateTheme::plain().format_success("Shader Model 6.6");
        assert_eq!(msg, "✓ Shader Model 6.6");
    }

    #[test]
    fn theme_formats_error() {
        let msg = GateTheme::plain().format_error("DirectX 12 Mesh Shaders");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Mesh Shaders"));
    }

    #[test]
    fn theme_formats_warning() {
        let msg = GateTheme::plain().format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_header() {
        let msg = GateTheme::plain().format_header("Incompatible Hardware");
        assert!(msg.contains("Incompatible Hardware"));
    }

    #[test]
    fn default_impl_matches_new() {
        assert_eq!(
            GateTheme::default().format_success("test"),
            GateTheme::new().format_success("test")
        );
    }
}
