//! Configuration file discovery and loading.
//!
//! This module finds the gate's YAML files under a project root and layers
//! them into one [`YamlConfig`].

use crate::config::merger::merge_layers;
use crate::config::source::YamlConfig;
use crate::error::{GateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root that holds the gate's config.
pub const CONFIG_DIR: &str = ".gpugate";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.gpugate/config.yml`)
/// 2. Local overrides (`.gpugate/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .gpugate/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .gpugate/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Whether any config file was found.
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.project_local.is_none()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<YamlConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    YamlConfig::parse(&content).map_err(|e| GateError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and layer every config file found under `project_root`.
///
/// Returns `Ok(None)` when the project has no config at all.
pub fn load_merged_config(project_root: &Path) -> Result<Option<YamlConfig>> {
    let paths = ConfigPaths::discover(project_root);
    if paths.is_empty() {
        tracing::debug!(root = %project_root.display(), "no gate config found");
        return Ok(None);
    }

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!(path = %path.display(), "loading config layer");
        let layer = load_config_file(path)?;
        // An empty file parses to null, which would wipe earlier layers.
        if !layer.root().is_null() {
            layers.push(layer.root().clone());
        }
    }

    Ok(Some(YamlConfig::new(merge_layers(&layers))))
}

/// Load config with an optional explicit path.
///
/// An explicit path is loaded on its own, without layering, and must exist.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<Option<YamlConfig>> {
    match config_override {
        Some(path) => load_config_file(path).map(Some),
        None => load_merged_config(project_root),
    }
}

/// Like [`load_config`], but an unreadable or invalid file is logged and
/// treated as no configuration.
pub fn load_config_or_default(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Option<YamlConfig> {
    match load_config(project_root, config_override) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring gate config: {}", e);
            None
        }
    }
}
