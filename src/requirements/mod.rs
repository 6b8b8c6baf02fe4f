//! Required-feature resolution.
//!
//! Turns rendering configuration into the [`FeatureSet`](crate::features::FeatureSet)
//! the adapter must support.
//!
//! # Modules
//!
//! - [`resolver`] - Toggle table and [`compute_required_features`]

pub mod resolver;

pub use resolver::{compute_required_features, ToggleRequirement, BASELINE, RENDERER_TOGGLES};
