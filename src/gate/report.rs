//! Deficiency report formatting.

use crate::config::GateMessages;
use crate::features::{FeatureSet, HardwareFeature};

/// Everything shown to the user when the adapter falls short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeficiencyReport {
    pub required: FeatureSet,
    pub detected: FeatureSet,
    /// Required and not detected.
    pub missing: FeatureSet,
    /// One `"\n• <name>"` line per missing feature.
    pub missing_list: String,
    /// `?missing=<slug>&missing=<slug>...`, empty when nothing is missing.
    pub query: String,
    /// Complete dialog body.
    pub message: String,
    pub title: String,
    /// Help link with the query appended; `None` when no base URL is set.
    pub help_url: Option<String>,
}

impl DeficiencyReport {
    pub fn build(required: FeatureSet, detected: FeatureSet, messages: &GateMessages) -> Self {
        let missing = required.difference(detected);
        let missing_list = format_missing_list(missing);
        let query = format_query(missing);
        let message = compose_message(&messages.problem, &missing_list, &messages.question);
        let help_url = if messages.help_url.is_empty() {
            None
        } else {
            Some(format!("{}{}", messages.help_url, query))
        };

        Self {
            required,
            detected,
            missing,
            missing_list,
            query,
            message,
            title: messages.title.clone(),
            help_url,
        }
    }

    pub fn missing_features(&self) -> impl Iterator<Item = HardwareFeature> {
        self.missing.iter()
    }
}

/// Bulleted list of feature names, lowest bit first.
pub fn format_missing_list(missing: FeatureSet) -> String {
    missing
        .iter()
        .map(|feature| format!("\n• {}", feature.name()))
        .collect()
}

/// Help-link query string, lowest bit first.
pub fn format_query(missing: FeatureSet) -> String {
    let mut query = String::new();
    for feature in missing.iter() {
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str("missing=");
        query.push_str(feature.slug());
    }
    query
}

/// Dialog body: problem, the missing list, then the question.
pub fn compose_message(problem: &str, missing_list: &str, question: &str) -> String {
    format!(
        "{}\n\nMissing Features:{}\n\n{}",
        problem, missing_list, question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{DEFAULT_PROBLEM_MESSAGE, DEFAULT_QUESTION_MESSAGE};

    #[test]
    fn single_missing_feature() {
        let required = HardwareFeature::Dx12 | HardwareFeature::RayTracing;
        let detected = FeatureSet::from(HardwareFeature::Dx12);
        let report = DeficiencyReport::build(required, detected, &GateMessages::default());

        assert_eq!(report.missing, FeatureSet::from(HardwareFeature::RayTracing));
        assert_eq!(report.missing_list, "\n• DirectX 12 Ray Tracing (Tier 1.1)");
        assert_eq!(report.query, "?missing=raytracing");
        assert_eq!(
            report.help_url.as_deref(),
            Some("https://example.com/?missing=raytracing")
        );
    }

    #[test]
    fn multiple_missing_features_in_bit_order() {
        let missing = HardwareFeature::Vrs | HardwareFeature::Atomic64 | HardwareFeature::Sm66;
        assert_eq!(
            format_query(missing),
            "?missing=atomic64&missing=sm66&missing=vrs"
        );
        assert_eq!(
            format_missing_list(missing),
            "\n• DirectX 12 64-bit Atomics\n• Shader Model 6.6\n• DirectX 12 Variable Rate Shading (Tier 2)"
        );
    }

    #[test]
    fn nothing_missing_formats_empty() {
        assert_eq!(format_query(FeatureSet::empty()), "");
        assert_eq!(format_missing_list(FeatureSet::empty()), "");
    }

    #[test]
    fn message_layout() {
        let report = DeficiencyReport::build(
            FeatureSet::from(HardwareFeature::Dx12),
            FeatureSet::empty(),
            &GateMessages::default(),
        );
        assert_eq!(
            report.message,
            format!(
                "{}\n\nMissing Features:\n• DirectX 12\n\n{}",
                DEFAULT_PROBLEM_MESSAGE, DEFAULT_QUESTION_MESSAGE
            )
        );
    }

    #[test]
    fn empty_help_url_disables_link() {
        let messages = GateMessages {
            help_url: String::new(),
            ..GateMessages::default()
        };
        let report = DeficiencyReport::build(
            FeatureSet::from(HardwareFeature::Dx12),
            FeatureSet::empty(),
            &messages,
        );
        assert_eq!(report.help_url, None);
        assert_eq!(report.query, "?missing=dx12");
    }

    #[test]
    fn detected_extras_are_not_listed() {
        let required = FeatureSet::from(HardwareFeature::Sm66);
        let detected = HardwareFeature::Dx12 | HardwareFeature::Vrs;
        let report = DeficiencyReport::build(required, detected, &GateMessages::default());
        assert_eq!(
            report.missing_features().collect::<Vec<_>>(),
            vec![HardwareFeature::Sm66]
        );
    }
}
