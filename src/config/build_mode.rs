//! Build flavour of the running binary.

use std::fmt;

/// Whether development-only settings are honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Development and test builds. `simulate_failure` is read.
    #[default]
    Development,
    /// Release builds for players. `simulate_failure` is ignored.
    Shipping,
}

impl BuildMode {
    /// Mode of this binary, fixed at compile time by the `shipping` feature.
    pub const fn current() -> Self {
        if cfg!(feature = "shipping") {
            BuildMode::Shipping
        } else {
            BuildMode::Development
        }
    }

    pub const fn is_shipping(self) -> bool {
        matches!(self, BuildMode::Shipping)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => f.write_str("development"),
            BuildMode::Shipping => f.write_str("shipping"),
        }
    }
}
