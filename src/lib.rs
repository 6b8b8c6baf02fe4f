//! gpu-gate - Startup gate for graphics hardware requirements.
//!
//! Before a renderer initialises, gpu-gate works out which Direct3D 12
//! capabilities the configured rendering features need, asks the default
//! adapter which it supports, and, if anything is missing, tells the user
//! what and ends the process.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and typed lookup
//! - [`device`] - Device creation and capability detection
//! - [`error`] - Error types and result aliases
//! - [`features`] - Hardware feature bits and their descriptions
//! - [`gate`] - The startup check and deficiency report
//! - [`requirements`] - Mapping configuration to required features
//! - [`ui`] - Dialogs, URL launching and process exit
//!
//! # Example
//!
//! ```
//! use gpu_gate::config::{BuildMode, MapConfig};
//! use gpu_gate::features::HardwareFeature;
//! use gpu_gate::requirements::compute_required_features;
//!
//! let config = MapConfig::new().with("renderer", "r.Nanite", 1);
//! let required = compute_required_features(Some(&config), BuildMode::Development);
//! assert!(required.has(HardwareFeature::Atomic64));
//! assert!(required.has(HardwareFeature::Sm66));
//! ```
//!
//! For file-based config loading, see the integration tests.

pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod features;
pub mod gate;
pub mod requirements;
pub mod ui;

pub use error::{GateError, Result};
