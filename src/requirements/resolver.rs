//! Maps rendering configuration to required hardware features.
//!
//! The resolver reads a handful of renderer toggles and ORs feature bits
//! into a baseline set:
//!
//! | Toggle | Adds |
//! |---|---|
//! | `renderer.r.Nanite` | 64-bit atomics, wave ops, SM 6.6 |
//! | `renderer.r.Shadow.Virtual.Enable` | SM 6.6 |
//! | `renderer.r.RayTracing` | ray tracing tier 1.1 |
//! | `gpu_gate.simulate_failure` (development only) | simulated failure |

use crate::config::settings::{
    GATE_SECTION, KEY_NANITE, KEY_RAY_TRACING, KEY_SIMULATE_FAILURE, KEY_VIRTUAL_SHADOWS,
    RENDERER_SECTION,
};
use crate::config::{BuildMode, ConfigSource};
use crate::features::{FeatureSet, HardwareFeature};

/// Required by every configuration: the renderer cannot start without it.
pub const BASELINE: FeatureSet = FeatureSet::from_bits_truncate(HardwareFeature::Dx12.bit());

/// One renderer toggle and the features it needs when enabled.
#[derive(Debug, Clone, Copy)]
pub struct ToggleRequirement {
    pub section: &'static str,
    pub key: &'static str,
    pub adds: FeatureSet,
}

/// Renderer toggles, in lookup order.
pub const RENDERER_TOGGLES: [ToggleRequirement; 3] = [
    ToggleRequirement {
        section: RENDERER_SECTION,
        key: KEY_NANITE,
        adds: FeatureSet::from_bits_truncate(
            HardwareFeature::Atomic64.bit()
                | HardwareFeature::WaveOps.bit()
                | HardwareFeature::Sm66.bit(),
        ),
    },
    ToggleRequirement {
        section: RENDERER_SECTION,
        key: KEY_VIRTUAL_SHADOWS,
        adds: FeatureSet::from_bits_truncate(HardwareFeature::Sm66.bit()),
    },
    ToggleRequirement {
        section: RENDERER_SECTION,
        key: KEY_RAY_TRACING,
        adds: FeatureSet::from_bits_truncate(HardwareFeature::RayTracing.bit()),
    },
];

/// Compute the feature set the configured renderer needs.
///
/// Without a configuration source only [`BASELINE`] is required. A toggle
/// counts as enabled when its integer value is greater than zero.
/// `simulate_failure` is not even read in shipping builds.
pub fn compute_required_features(
    config: Option<&dyn ConfigSource>,
    mode: BuildMode,
) -> FeatureSet {
    let mut required = BASELINE;

    let Some(config) = config else {
        tracing::debug!("no configuration source, requiring baseline only");
        return required;
    };

    for toggle in RENDERER_TOGGLES {
        let value = config.get_int_or(toggle.section, toggle.key, 0);
        tracing::debug!(key = toggle.key, value, "renderer toggle");
        if value > 0 {
            required |= toggle.adds;
        }
    }

    if !mode.is_shipping() && config.get_bool_or(GATE_SECTION, KEY_SIMULATE_FAILURE, false) {
        tracing::debug!("simulated failure requested");
        required |= HardwareFeature::SimulatedFailure;
    }

    required
}
