//! Hardware feature bits and feature sets.
//!
//! - [`HardwareFeature`] - closed enumeration of capability bits
//! - [`FeatureSet`] - immutable bitmask over those bits
//! - [`descriptor`] - display names and slugs used in reports

pub mod descriptor;

pub use descriptor::{describe, FeatureDescriptor};

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use bitflags::bitflags;
use serde::{Serialize, Serializer};

/// A single hardware capability the renderer may depend on.
///
/// Discriminants are distinct powers of two so any combination fits in a
/// [`FeatureSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum HardwareFeature {
    /// Direct3D 12 at feature level 12_0.
    Dx12 = 1 << 0,
    /// 64-bit integer atomics on typed resources.
    Atomic64 = 1 << 1,
    /// Wave intrinsics.
    WaveOps = 1 << 2,
    /// Shader model 6.6 or newer.
    Sm66 = 1 << 3,
    /// Ray tracing tier 1.1 or newer.
    RayTracing = 1 << 4,
    /// Mesh shader tier 1 or newer.
    MeshShaders = 1 << 5,
    /// Variable rate shading tier 2 or newer.
    Vrs = 1 << 6,
    /// Never detected. Lets development builds force the failure path.
    SimulatedFailure = 1 << 7,
}

impl HardwareFeature {
    /// Every feature, lowest bit first.
    pub const ALL: [HardwareFeature; 8] = [
        HardwareFeature::Dx12,
        HardwareFeature::Atomic64,
        HardwareFeature::WaveOps,
        HardwareFeature::Sm66,
        HardwareFeature::RayTracing,
        HardwareFeature::MeshShaders,
        HardwareFeature::Vrs,
        HardwareFeature::SimulatedFailure,
    ];

    /// Raw bit value.
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Human-readable name, e.g. "Shader Model 6.6".
    pub fn name(self) -> &'static str {
        describe(self).name
    }

    /// Short machine-readable identifier, e.g. "sm66".
    pub fn slug(self) -> &'static str {
        describe(self).slug
    }
}

impl fmt::Display for HardwareFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for HardwareFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    struct FeatureBits: u32 {
        const DX12 = HardwareFeature::Dx12.bit();
        const ATOMIC64 = HardwareFeature::Atomic64.bit();
        const WAVE_OPS = HardwareFeature::WaveOps.bit();
        const SM66 = HardwareFeature::Sm66.bit();
        const RAY_TRACING = HardwareFeature::RayTracing.bit();
        const MESH_SHADERS = HardwareFeature::MeshShaders.bit();
        const VRS = HardwareFeature::Vrs.bit();
        const SIMULATED_FAILURE = HardwareFeature::SimulatedFailure.bit();
    }
}

/// An immutable combination of [`HardwareFeature`] bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureSet(FeatureBits);

impl FeatureSet {
    /// The empty set.
    pub const NONE: FeatureSet = FeatureSet(FeatureBits::empty());

    /// One past the highest feature bit. Iteration stops here.
    pub const MAX: u32 = 1 << 8;

    /// Every known feature.
    pub const ALL: FeatureSet = FeatureSet(FeatureBits::all());

    /// The empty set.
    pub const fn empty() -> Self {
        Self::NONE
    }

    /// Build a set from raw bits, dropping anything outside the enumeration.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        FeatureSet(FeatureBits::from_bits_truncate(bits))
    }

    /// Raw bitmask.
    pub const fn bits(self) -> u32 {
        self.0.bits()
    }

    /// Whether `feature` is in the set.
    pub const fn has(self, feature: HardwareFeature) -> bool {
        self.0.bits() & feature.bit() != 0
    }

    /// Set containing the features of both sets.
    #[must_use]
    pub const fn union(self, other: FeatureSet) -> FeatureSet {
        FeatureSet(self.0.union(other.0))
    }

    /// Features in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: FeatureSet) -> FeatureSet {
        FeatureSet(self.0.difference(other.0))
    }

    /// True when every feature in `self` is also in `other`.
    pub const fn is_subset_of(self, other: FeatureSet) -> bool {
        other.0.contains(self.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Number of features in the set.
    pub const fn len(self) -> usize {
        self.0.bits().count_ones() as usize
    }

    /// Features in the set, lowest bit first.
    pub fn iter(self) -> impl Iterator<Item = HardwareFeature> {
        HardwareFeature::ALL.into_iter().filter(move |f| self.has(*f))
    }
}

impl From<HardwareFeature> for FeatureSet {
    fn from(feature: HardwareFeature) -> Self {
        FeatureSet::from_bits_truncate(feature.bit())
    }
}

impl FromIterator<HardwareFeature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = HardwareFeature>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FeatureSet::NONE, |set, f| set | f)
    }
}

impl BitOr for FeatureSet {
    type Output = FeatureSet;

    fn bitor(self, rhs: FeatureSet) -> FeatureSet {
        self.union(rhs)
    }
}

impl BitOr<HardwareFeature> for FeatureSet {
    type Output = FeatureSet;

    fn bitor(self, rhs: HardwareFeature) -> FeatureSet {
        self.union(rhs.into())
    }
}

impl BitOr for HardwareFeature {
    type Output = FeatureSet;

    fn bitor(self, rhs: HardwareFeature) -> FeatureSet {
        FeatureSet::from(self).union(rhs.into())
    }
}

impl BitOrAssign for FeatureSet {
    fn bitor_assign(&mut self, rhs: FeatureSet) {
        *self = self.union(rhs);
    }
}

impl BitOrAssign<HardwareFeature> for FeatureSet {
    fn bitor_assign(&mut self, rhs: HardwareFeature) {
        *self = self.union(rhs.into());
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let slugs: Vec<_> = self.iter().map(HardwareFeature::slug).collect();
        f.write_str(&slugs.join("|"))
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_distinct_powers_of_two() {
        let mut seen = 0u32;
        for feature in HardwareFeature::ALL {
            assert!(feature.bit().is_power_of_two());
            assert_eq!(seen & feature.bit(), 0, "{:?} overlaps", feature);
            seen |= feature.bit();
        }
        assert!(seen < FeatureSet::MAX);
    }

    #[test]
    fn all_is_sorted_lowest_first() {
        let bits: Vec<u32> = HardwareFeature::ALL.iter().map(|f| f.bit()).collect();
        let mut sorted = bits.clone();
        sorted.sort_unstable();
        assert_eq!(bits, sorted);
    }

    #[test]
    fn truncation_keeps_single_known_bits() {
        assert_eq!(
            FeatureSet::from_bits_truncate(1 << 4),
            FeatureSet::from(HardwareFeature::RayTracing)
        );
        assert!(FeatureSet::from_bits_truncate(1 << 8).is_empty());
    }

    #[test]
    fn empty_set_has_nothing() {
        let set = FeatureSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(HardwareFeature::ALL.iter().all(|f| !set.has(*f)));
    }

    #[test]
    fn union_combines_without_mutating_operands() {
        let a = FeatureSet::from(HardwareFeature::Dx12);
        let b = FeatureSet::from(HardwareFeature::WaveOps);
        let c = a.union(b);
        assert!(c.has(HardwareFeature::Dx12));
        assert!(c.has(HardwareFeature::WaveOps));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn or_operators_match_union() {
        let set = HardwareFeature::Atomic64 | HardwareFeature::Sm66;
        let mut acc = FeatureSet::NONE;
        acc |= HardwareFeature::Atomic64;
        acc |= FeatureSet::from(HardwareFeature::Sm66);
        assert_eq!(set, acc);
        assert_eq!(set | HardwareFeature::Sm66, set);
    }

    #[test]
    fn subset_is_not_equality() {
        let required = HardwareFeature::Dx12 | HardwareFeature::RayTracing;
        let detected = required | HardwareFeature::Vrs;
        assert!(required.is_subset_of(detected));
        assert!(!detected.is_subset_of(required));
    }

    #[test]
    fn empty_set_is_subset_of_everything() {
        assert!(FeatureSet::NONE.is_subset_of(FeatureSet::NONE));
        assert!(FeatureSet::NONE.is_subset_of(FeatureSet::ALL));
    }

    #[test]
    fn everything_is_subset_of_all() {
        for bits in 0..FeatureSet::MAX {
            assert!(FeatureSet::from_bits_truncate(bits).is_subset_of(FeatureSet::ALL));
        }
    }

    #[test]
    fn difference_lists_missing_bits() {
        let required = HardwareFeature::Dx12 | HardwareFeature::RayTracing;
        let detected = FeatureSet::from(HardwareFeature::Dx12);
        let missing = required.difference(detected);
        assert_eq!(missing, FeatureSet::from(HardwareFeature::RayTracing));
    }

    #[test]
    fn from_bits_truncate_drops_unknown_bits() {
        let set = FeatureSet::from_bits_truncate(0xFFFF_FFFF);
        assert_eq!(set, FeatureSet::ALL);
    }

    #[test]
    fn iter_yields_lowest_bit_first() {
        let set = HardwareFeature::Vrs | HardwareFeature::Dx12 | HardwareFeature::Sm66;
        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![HardwareFeature::Dx12, HardwareFeature::Sm66, HardwareFeature::Vrs]
        );
    }

    #[test]
    fn collect_builds_set() {
        let set: FeatureSet = [HardwareFeature::WaveOps, HardwareFeature::MeshShaders]
            .into_iter()
            .collect();
        assert_eq!(set, HardwareFeature::WaveOps | HardwareFeature::MeshShaders);
    }

    #[test]
    fn display_joins_slugs() {
        let set = HardwareFeature::Dx12 | HardwareFeature::RayTracing;
        assert_eq!(set.to_string(), "dx12|raytracing");
        assert_eq!(FeatureSet::NONE.to_string(), "none");
    }

    #[test]
    fn serializes_as_slug_list() {
        let set = HardwareFeature::Dx12 | HardwareFeature::WaveOps;
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["dx12","waveops"]"#);
    }
}
