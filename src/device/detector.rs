//! Capability detection against an open device.

use super::{
    FeatureData, FeatureQuery, GraphicsDevice, MeshShaderTier, RaytracingTier, ShaderModel,
    VariableShadingRateTier,
};
use crate::features::{FeatureSet, HardwareFeature};

/// One feature bit, the query that answers it, and the test applied to the
/// answer.
#[derive(Clone, Copy)]
pub struct CapabilityProbe {
    pub feature: HardwareFeature,
    pub query: FeatureQuery,
    pub supported: fn(&FeatureData) -> bool,
}

impl std::fmt::Debug for CapabilityProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityProbe")
            .field("feature", &self.feature)
            .field("query", &self.query)
            .finish()
    }
}

/// Minimum shader model for [`HardwareFeature::Sm66`].
pub const MIN_SHADER_MODEL: ShaderModel = ShaderModel::SM_6_6;
/// Minimum tier for [`HardwareFeature::RayTracing`].
pub const MIN_RAYTRACING_TIER: RaytracingTier = RaytracingTier::Tier1_1;
/// Minimum tier for [`HardwareFeature::MeshShaders`].
pub const MIN_MESH_SHADER_TIER: MeshShaderTier = MeshShaderTier::Tier1;
/// Minimum tier for [`HardwareFeature::Vrs`].
pub const MIN_VRS_TIER: VariableShadingRateTier = VariableShadingRateTier::Tier2;

/// Queries issued by [`detect_hardware_features`], in order.
pub const CAPABILITY_PROBES: [CapabilityProbe; 6] = [
    CapabilityProbe {
        feature: HardwareFeature::Atomic64,
        query: FeatureQuery::Options9,
        supported: |data| {
            matches!(
                data,
                FeatureData::Options9 {
                    atomic_int64_on_typed_resource_supported: true
                }
            )
        },
    },
    CapabilityProbe {
        feature: HardwareFeature::WaveOps,
        query: FeatureQuery::Options1,
        supported: |data| matches!(data, FeatureData::Options1 { wave_ops: true }),
    },
    CapabilityProbe {
        feature: HardwareFeature::Sm66,
        query: FeatureQuery::ShaderModel {
            highest: MIN_SHADER_MODEL,
        },
        supported: |data| match data {
            FeatureData::ShaderModel {
                highest_shader_model,
            } => *highest_shader_model >= MIN_SHADER_MODEL,
            _ => false,
        },
    },
    CapabilityProbe {
        feature: HardwareFeature::RayTracing,
        query: FeatureQuery::Options5,
        supported: |data| match data {
            FeatureData::Options5 { raytracing_tier } => *raytracing_tier >= MIN_RAYTRACING_TIER,
            _ => false,
        },
    },
    CapabilityProbe {
        feature: HardwareFeature::MeshShaders,
        query: FeatureQuery::Options7,
        supported: |data| match data {
            FeatureData::Options7 { mesh_shader_tier } => *mesh_shader_tier >= MIN_MESH_SHADER_TIER,
            _ => false,
        },
    },
    CapabilityProbe {
        feature: HardwareFeature::Vrs,
        query: FeatureQuery::Options6,
        supported: |data| match data {
            FeatureData::Options6 {
                variable_shading_rate_tier,
            } => *variable_shading_rate_tier >= MIN_VRS_TIER,
            _ => false,
        },
    },
];

/// Query `device` for every known capability.
///
/// The baseline bit is always set: a handle only exists once creation at
/// the gate's minimum feature level has succeeded. A query that fails, is
/// unsupported, or answers with the wrong structure leaves its bit clear.
pub fn detect_hardware_features(device: &dyn GraphicsDevice) -> FeatureSet {
    let mut detected = FeatureSet::from(HardwareFeature::Dx12);

    for probe in &CAPABILITY_PROBES {
        match device.check_feature_support(probe.query) {
            Ok(data) => {
                let supported = (probe.supported)(&data);
                tracing::debug!(
                    query = %probe.query,
                    feature = probe.feature.slug(),
                    supported,
                    "capability query answered"
                );
                if supported {
                    detected |= probe.feature;
                }
            }
            Err(e) => {
                tracing::debug!(feature = probe.feature.slug(), "capability query failed: {}", e);
            }
        }
    }

    detected
}
