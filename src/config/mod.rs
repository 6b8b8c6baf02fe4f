//! Configuration loading and lookup for the startup gate.
//!
//! - Typed key lookup in [`source`]
//! - File discovery and loading in [`loader`]
//! - Layering of project and local files in [`merger`]
//! - Keys, defaults and dialog strings in [`settings`]
//! - Build flavour in [`build_mode`]
//!
//! # Example
//!
//! ```
//! use gpu_gate::config::{ConfigSource, YamlConfig};
//!
//! let config = YamlConfig::parse("renderer:\n  r.RayTracing: 1\n").unwrap();
//! assert_eq!(config.get_int("renderer", "r.RayTracing"), Some(1));
//! assert_eq!(config.get_int_or("renderer", "r.Nanite", 0), 0);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.gpugate/config.yml`)
//! 2. Local overrides (`.gpugate/config.local.yml`)

pub mod build_mode;
pub mod loader;
pub mod merger;
pub mod settings;
pub mod source;

pub use build_mode::BuildMode;
pub use loader::{
    load_config, load_config_file, load_config_or_default, load_merged_config, ConfigPaths,
    CONFIG_DIR,
};
pub use merger::{deep_merge, merge_layers};
pub use settings::GateMessages;
pub use source::{ConfigSource, MapConfig, YamlConfig};
