//! Display names and slugs for hardware features.
//!
//! Names appear in the deficiency dialog; slugs become `missing=` query
//! parameters on the help link.

use super::HardwareFeature;

/// Static reporting data for one feature bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub feature: HardwareFeature,
    pub name: &'static str,
    pub slug: &'static str,
}

const DESCRIPTORS: [FeatureDescriptor; 8] = [
    FeatureDescriptor {
        feature: HardwareFeature::Dx12,
        name: "DirectX 12",
        slug: "dx12",
    },
    FeatureDescriptor {
        feature: HardwareFeature::Atomic64,
        name: "DirectX 12 64-bit Atomics",
        slug: "atomic64",
    },
    FeatureDescriptor {
        feature: HardwareFeature::WaveOps,
        name: "DirectX 12 Wave Operations",
        slug: "waveops",
    },
    FeatureDescriptor {
        feature: HardwareFeature::Sm66,
        name: "Shader Model 6.6",
        slug: "sm66",
    },
    FeatureDescriptor {
        feature: HardwareFeature::RayTracing,
        name: "DirectX 12 Ray Tracing (Tier 1.1)",
        slug: "raytracing",
    },
    FeatureDescriptor {
        feature: HardwareFeature::MeshShaders,
        name: "DirectX 12 Mesh Shaders",
        slug: "meshshaders",
    },
    FeatureDescriptor {
        feature: HardwareFeature::Vrs,
        name: "DirectX 12 Variable Rate Shading (Tier 2)",
        slug: "vrs",
    },
    FeatureDescriptor {
        feature: HardwareFeature::SimulatedFailure,
        name: "Simulated Failure (Development)",
        slug: "simulated",
    },
];

/// Reporting data for `feature`.
pub fn describe(feature: HardwareFeature) -> &'static FeatureDescriptor {
    // DESCRIPTORS is ordered by bit, so the index is the bit position.
    &DESCRIPTORS[feature.bit().trailing_zeros() as usize]
}

/// All descriptors, lowest bit first.
pub fn all() -> &'static [FeatureDescriptor] {
    &DESCRIPTORS
}
