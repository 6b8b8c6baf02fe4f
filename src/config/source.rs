//! Read-only configuration lookup.
//!
//! Every lookup is by section and key and returns `None` when the value is
//! missing or has an unusable type. Callers pick the default.

use std::collections::HashMap;

use serde_yaml::Value;

/// Typed, read-only key lookup.
pub trait ConfigSource {
    /// Integer value. Booleans and boolean words read as 0/1 and numeric
    /// strings are parsed.
    fn get_int(&self, section: &str, key: &str) -> Option<i64>;

    /// Boolean value. Integers read as non-zero and the usual words
    /// (`true`, `yes`, `on`, `1` and their negatives) are accepted.
    fn get_bool(&self, section: &str, key: &str) -> Option<bool>;

    /// String value. Numbers and booleans are rendered to text.
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Integer value or `default` when missing.
    fn get_int_or(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_int(section, key).unwrap_or(default)
    }

    /// Boolean value or `default` when missing.
    fn get_bool_or(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_bool(section, key).unwrap_or(default)
    }

    /// String value or `default` when missing.
    fn get_string_or(&self, section: &str, key: &str, default: &str) -> String {
        self.get_string(section, key)
            .unwrap_or_else(|| default.to_string())
    }
}

fn parse_bool_word(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Integer from text, accepting boolean words as 0/1.
fn parse_int_text(s: &str) -> Option<i64> {
    let raw = s.trim();
    raw.parse()
        .ok()
        .or_else(|| parse_bool_word(raw).map(i64::from))
}

/// Boolean from text, accepting integers as non-zero.
fn parse_bool_text(s: &str) -> Option<bool> {
    parse_bool_word(s).or_else(|| s.trim().parse::<i64>().ok().map(|i| i != 0))
}

/// Configuration backed by a parsed YAML document of the form
/// `section: { key: value }`.
#[derive(Debug, Clone, Default)]
pub struct YamlConfig {
    root: Value,
}

impl YamlConfig {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a YAML string.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let root: Value = serde_yaml::from_str(content)?;
        Ok(Self::new(root))
    }

    /// The underlying document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    fn lookup(&self, section: &str, key: &str) -> Option<&Value> {
        self.root.get(section)?.get(key)
    }
}

impl ConfigSource for YamlConfig {
    fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        match self.lookup(section, key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::String(s) => parse_int_text(s),
            _ => None,
        }
    }

    fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        match self.lookup(section, key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|i| i != 0),
            Value::String(s) => parse_bool_text(s),
            _ => None,
        }
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        match self.lookup(section, key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// In-memory configuration, for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    values: HashMap<(String, String), String>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, section: &str, key: &str, value: impl ToString) -> Self {
        self.set(section, key, value);
        self
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl ToString) {
        self.values
            .insert((section.to_string(), key.to_string()), value.to_string());
    }

    fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.values
            .get(&(section.to_string(), key.to_string()))
            .map(String::as_str)
    }
}

impl ConfigSource for MapConfig {
    fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        parse_int_text(self.lookup(section, key)?)
    }

    fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        parse_bool_text(self.lookup(section, key)?)
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.lookup(section, key).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> YamlConfig {
        YamlConfig::parse(s).unwrap()
    }

    #[test]
    fn yaml_reads_integers() {
        let config = yaml("renderer:\n  r.Nanite: 1\n  r.RayTracing: \"2\"\n");
        assert_eq!(config.get_int("renderer", "r.Nanite"), Some(1));
        assert_eq!(config.get_int("renderer", "r.RayTracing"), Some(2));
    }

    #[test]
    fn yaml_bool_reads_as_int() {
        let config = yaml("renderer:\n  r.Nanite: true\n");
        assert_eq!(config.get_int("renderer", "r.Nanite"), Some(1));
    }

    #[test]
    fn yaml_reads_bools_in_several_spellings() {
        let config = yaml(
            "gpu_gate:\n  a: true\n  b: 0\n  c: \"yes\"\n  d: \"off\"\n  e: \"maybe\"\n",
        );
        assert_eq!(config.get_bool("gpu_gate", "a"), Some(true));
        assert_eq!(config.get_bool("gpu_gate", "b"), Some(false));
        assert_eq!(config.get_bool("gpu_gate", "c"), Some(true));
        assert_eq!(config.get_bool("gpu_gate", "d"), Some(false));
        assert_eq!(config.get_bool("gpu_gate", "e"), None);
    }

    #[test]
    fn yaml_reads_strings() {
        let config = yaml("gpu_gate:\n  error_title: Nope\n  help_url: 42\n");
        assert_eq!(config.get_string("gpu_gate", "error_title").as_deref(), Some("Nope"));
        assert_eq!(config.get_string("gpu_gate", "help_url").as_deref(), Some("42"));
    }

    #[test]
    fn yaml_missing_section_or_key_is_none() {
        let config = yaml("renderer:\n  r.Nanite: 1\n");
        assert_eq!(config.get_int("renderer", "r.RayTracing"), None);
        assert_eq!(config.get_int("other", "r.Nanite"), None);
    }

    #[test]
    fn yaml_wrong_shape_is_none() {
        let config = yaml("renderer:\n  r.Nanite: [1, 2]\n");
        assert_eq!(config.get_int("renderer", "r.Nanite"), None);
        assert_eq!(config.get_string("renderer", "r.Nanite"), None);
    }

    #[test]
    fn empty_document_has_no_values() {
        let config = yaml("");
        assert_eq!(config.get_int("renderer", "r.Nanite"), None);
    }

    #[test]
    fn defaults_apply_when_missing() {
        let config = MapConfig::new();
        assert_eq!(config.get_int_or("renderer", "r.Nanite", 0), 0);
        assert!(config.get_bool_or("gpu_gate", "simulate_failure", true));
        assert_eq!(config.get_string_or("gpu_gate", "error_title", "x"), "x");
    }

    #[test]
    fn map_config_parses_on_read() {
        let config = MapConfig::new()
            .with("renderer", "r.Nanite", 1)
            .with("renderer", "r.RayTracing", "true")
            .with("gpu_gate", "simulate_failure", "1");
        assert_eq!(config.get_int("renderer", "r.Nanite"), Some(1));
        assert_eq!(config.get_int("renderer", "r.RayTracing"), Some(1));
        assert_eq!(config.get_bool("gpu_gate", "simulate_failure"), Some(true));
    }

    #[test]
    fn yaml_and_map_agree_on_string_values() {
        for raw in ["on", "true", "YES", "off", "no", "0", "2", " 1 ", "maybe", ""] {
            let file = yaml(&format!("renderer:\n  r.RayTracing: \"{}\"\n", raw));
            let map = MapConfig::new().with("renderer", "r.RayTracing", raw);
            assert_eq!(
                file.get_int("renderer", "r.RayTracing"),
                map.get_int("renderer", "r.RayTracing"),
                "get_int({:?})",
                raw
            );
            assert_eq!(
                file.get_bool("renderer", "r.RayTracing"),
                map.get_bool("renderer", "r.RayTracing"),
                "get_bool({:?})",
                raw
            );
        }
    }

    #[test]
    fn yaml_bool_word_string_enables_toggle() {
        let config = yaml("renderer:\n  r.RayTracing: \"on\"\n");
        assert_eq!(config.get_int("renderer", "r.RayTracing"), Some(1));
    }
}
