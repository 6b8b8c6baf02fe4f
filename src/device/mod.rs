//! Graphics device access and capability detection.
//!
//! This module provides:
//! - [`DeviceProvider`] - opens a handle to the default adapter
//! - [`GraphicsDevice`] - answers capability queries on an open handle
//! - [`detect_hardware_features`] - turns query answers into a [`FeatureSet`]
//! - Backends: [`d3d12`] (Windows), [`UnavailableProvider`] (elsewhere) and
//!   the scripted [`MockDeviceProvider`] for tests
//!
//! # Example
//!
//! ```
//! use gpu_gate::device::{detect_hardware_features, MockDevice, RaytracingTier};
//! use gpu_gate::features::HardwareFeature;
//!
//! let device = MockDevice::baseline().with_raytracing_tier(RaytracingTier::Tier1_1);
//! let detected = detect_hardware_features(&device);
//! assert!(detected.has(HardwareFeature::RayTracing));
//! assert!(!detected.has(HardwareFeature::MeshShaders));
//! ```
//!
//! [`FeatureSet`]: crate::features::FeatureSet

#[cfg(windows)]
pub mod d3d12;
pub mod detector;
pub mod mock;
pub mod unavailable;

pub use detector::{detect_hardware_features, CAPABILITY_PROBES};
pub use mock::{MockDevice, MockDeviceProvider};
pub use unavailable::UnavailableProvider;

use std::fmt;

use thiserror::Error;

/// Minimum Direct3D feature level a device must expose to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeatureLevel {
    Level11_0,
    Level11_1,
    Level12_0,
    Level12_1,
    Level12_2,
}

impl FeatureLevel {
    /// The level the gate asks for. Creation at this level proves baseline
    /// API support.
    pub const GATE_MINIMUM: FeatureLevel = FeatureLevel::Level12_0;
}

impl fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeatureLevel::Level11_0 => "11_0",
            FeatureLevel::Level11_1 => "11_1",
            FeatureLevel::Level12_0 => "12_0",
            FeatureLevel::Level12_1 => "12_1",
            FeatureLevel::Level12_2 => "12_2",
        };
        f.write_str(s)
    }
}

/// HLSL shader model version. Ordered by major, then minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderModel {
    pub major: u8,
    pub minor: u8,
}

impl ShaderModel {
    pub const SM_6_0: ShaderModel = ShaderModel::new(6, 0);
    pub const SM_6_6: ShaderModel = ShaderModel::new(6, 6);
    pub const SM_6_7: ShaderModel = ShaderModel::new(6, 7);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ShaderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RaytracingTier {
    #[default]
    NotSupported,
    Tier1_0,
    Tier1_1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MeshShaderTier {
    #[default]
    NotSupported,
    Tier1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum VariableShadingRateTier {
    #[default]
    NotSupported,
    Tier1,
    Tier2,
}

/// Which capability structure to fill.
///
/// Mirrors the Direct3D 12 `D3D12_FEATURE` kinds the gate needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureQuery {
    /// Wave intrinsics.
    Options1,
    /// Ray tracing tier.
    Options5,
    /// Variable rate shading tier.
    Options6,
    /// Mesh shader tier.
    Options7,
    /// 64-bit atomics on typed resources.
    Options9,
    /// Highest supported shader model, asking about `highest` and below.
    ShaderModel { highest: ShaderModel },
}

impl FeatureQuery {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureQuery::Options1 => "OPTIONS1",
            FeatureQuery::Options5 => "OPTIONS5",
            FeatureQuery::Options6 => "OPTIONS6",
            FeatureQuery::Options7 => "OPTIONS7",
            FeatureQuery::Options9 => "OPTIONS9",
            FeatureQuery::ShaderModel { .. } => "SHADER_MODEL",
        }
    }
}

impl fmt::Display for FeatureQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A filled capability structure.
///
/// Only the fields the gate reads are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureData {
    Options1 {
        wave_ops: bool,
    },
    Options5 {
        raytracing_tier: RaytracingTier,
    },
    Options6 {
        variable_shading_rate_tier: VariableShadingRateTier,
    },
    Options7 {
        mesh_shader_tier: MeshShaderTier,
    },
    Options9 {
        atomic_int64_on_typed_resource_supported: bool,
    },
    ShaderModel {
        highest_shader_model: ShaderModel,
    },
}

/// Device creation failure.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No backend exists on this platform.
    #[error("no graphics backend available: {reason}")]
    Unavailable { reason: String },

    /// The driver refused to create a device at the requested level.
    #[error("failed to create device at feature level {level}: {message}")]
    CreationFailed { level: FeatureLevel, message: String },
}

/// Capability query failure.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The runtime does not know this query (older OS or driver).
    #[error("capability query {0} is not supported")]
    Unsupported(FeatureQuery),

    /// The runtime rejected the query.
    #[error("capability query {query} failed: {message}")]
    Failed { query: FeatureQuery, message: String },
}

/// An open handle to a graphics device.
///
/// Dropping the handle releases it.
pub trait GraphicsDevice {
    /// Fill the capability structure selected by `query`.
    fn check_feature_support(&self, query: FeatureQuery) -> Result<FeatureData, QueryError>;

    /// Adapter description, when the backend knows it.
    fn adapter_name(&self) -> Option<String> {
        None
    }
}

/// Opens handles to the default graphics adapter.
pub trait DeviceProvider {
    /// Create a device on the default adapter supporting at least `minimum`.
    fn create_device(&self, minimum: FeatureLevel) -> Result<Box<dyn GraphicsDevice>, DeviceError>;
}

/// Provider for the current platform: Direct3D 12 on Windows, otherwise a
/// provider that never yields a device.
pub fn default_provider() -> Box<dyn DeviceProvider> {
    #[cfg(windows)]
    {
        Box::new(d3d12::D3d12Provider::new())
    }
    #[cfg(not(windows))]
    {
        Box::new(UnavailableProvider::new(
            "Direct3D 12 is only available on Windows",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_models_order_by_major_then_minor() {
        assert!(ShaderModel::SM_6_6 > ShaderModel::new(6, 5));
        assert!(ShaderModel::SM_6_7 > ShaderModel::SM_6_6);
        assert!(ShaderModel::SM_6_0 > ShaderModel::new(5, 1));
        assert!(ShaderModel::new(7, 0) > ShaderModel::SM_6_7);
    }

    #[test]
    fn tiers_order_by_capability() {
        assert!(RaytracingTier::Tier1_1 > RaytracingTier::Tier1_0);
        assert!(RaytracingTier::Tier1_0 > RaytracingTier::NotSupported);
        assert!(MeshShaderTier::Tier1 > MeshShaderTier::NotSupported);
        assert!(VariableShadingRateTier::Tier2 > VariableShadingRateTier::Tier1);
    }

    #[test]
    fn feature_levels_order() {
        assert!(FeatureLevel::Level12_0 > FeatureLevel::Level11_1);
        assert_eq!(FeatureLevel::GATE_MINIMUM.to_string(), "12_0");
    }

    #[test]
    fn query_errors_name_the_query() {
        let err = QueryError::Unsupported(FeatureQuery::Options9);
        assert!(err.to_string().contains("OPTIONS9"));
        let err = QueryError::Failed {
            query: FeatureQuery::ShaderModel {
                highest: ShaderModel::SM_6_6,
            },
            message: "E_INVALIDARG".into(),
        };
        assert!(err.to_string().contains("SHADER_MODEL"));
        assert!(err.to_string().contains("E_INVALIDARG"));
    }

    #[test]
    fn device_error_displays_level() {
        let err = DeviceError::CreationFailed {
            level: FeatureLevel::Level12_0,
            message: "DXGI_ERROR_UNSUPPORTED".into(),
        };
        assert!(err.to_string().contains("12_0"));
    }

    #[cfg(not(windows))]
    #[test]
    fn default_provider_has_no_device_off_windows() {
        let provider = default_provider();
        assert!(provider.create_device(FeatureLevel::GATE_MINIMUM).is_err());
    }
}
