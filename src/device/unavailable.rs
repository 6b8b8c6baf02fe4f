//! Provider for platforms without a graphics backend.

use super::{DeviceError, DeviceProvider, FeatureLevel, GraphicsDevice};

/// Refuses every creation attempt.
///
/// Since the baseline API is always required, a gate using this provider
/// always fails.
#[derive(Debug, Clone)]
pub struct UnavailableProvider {
    reason: String,
}

impl UnavailableProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl DeviceProvider for UnavailableProvider {
    fn create_device(&self, minimum: FeatureLevel) -> Result<Box<dyn GraphicsDevice>, DeviceError> {
        tracing::debug!(level = %minimum, "no graphics backend: {}", self.reason);
        Err(DeviceError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_always_fails_with_reason() {
        let provider = UnavailableProvider::new("headless");
        let err = provider
            .create_device(FeatureLevel::GATE_MINIMUM)
            .err()
            .unwrap();
        assert!(err.to_string().contains("headless"));
        assert_eq!(provider.reason(), "headless");
    }
}
