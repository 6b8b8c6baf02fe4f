//! Layering of YAML configuration files.
//!
//! `.gpugate/config.local.yml` overrides `.gpugate/config.yml` so a developer
//! can flip a toggle (say `simulate_failure`) without touching the shared file.
//!
//! # Merge Rules
//!
//! - Sections (mappings) merge key by key, recursively
//! - `null` in the overlay removes the key, restoring the built-in default
//! - Anything else in the overlay replaces the base value

use serde_yaml::Value;

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in overlay_map {
                if value.is_null() {
                    merged.remove(key);
                    continue;
                }
                let next = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Mapping(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Fold layers in order; the last layer wins.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_toggle_replaces_base_toggle() {
        let base = yaml(
            r#"
renderer:
  r.Nanite: 0
  r.RayTracing: 1
"#,
        );
        let overlay = yaml(
            r#"
renderer:
  r.Nanite: 1
"#,
        );

        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["renderer"]["r.Nanite"], 1);
        assert_eq!(merged["renderer"]["r.RayTracing"], 1);
    }

    #[test]
    fn null_removes_key() {
        let base = yaml("gpu_gate:\n  help_url: https://support.example.com/gpu\n");
        let overlay = yaml("gpu_gate:\n  help_url: null\n");

        let merged = deep_merge(&base, &overlay);
        assert!(merged["gpu_gate"].get("help_url").is_none());
    }

    #[test]
    fn new_sections_are_added() {
        let base = yaml("renderer:\n  r.Nanite: 1\n");
        let overlay = yaml("gpu_gate:\n  simulate_failure: true\n");

        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["renderer"]["r.Nanite"], 1);
        assert_eq!(merged["gpu_gate"]["simulate_failure"], true);
    }

    #[test]
    fn scalar_overlay_replaces_section() {
        let base = yaml("renderer:\n  r.Nanite: 1\n");
        let overlay = yaml("renderer: disabled\n");

        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["renderer"], "disabled");
    }

    #[test]
    fn merge_layers_applies_in_order() {
        let layers = vec![
            yaml("renderer:\n  r.RayTracing: 1\n"),
            yaml("renderer:\n  r.RayTracing: 0\n"),
            yaml("renderer:\n  r.RayTracing: 2\n"),
        ];
        let merged = merge_layers(&layers);
        assert_eq!(merged["renderer"]["r.RayTracing"], 2);
    }

    #[test]
    fn merge_layers_of_nothing_is_empty_mapping() {
        let merged = merge_layers(&[]);
        assert!(merged.as_mapping().is_some_and(|m| m.is_empty()));
    }
}
