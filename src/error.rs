//! Error types for gpu-gate operations.
//!
//! This module defines [`GateError`], the error type used by the ambient
//! layers (configuration loading, prompting, the CLI), and a [`Result`] type
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The capability check itself has no error path: failed device creation
//!   and failed queries both mean "capability absent"
//! - Use `GateError` for configuration and host-interaction failures
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gpu-gate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The user could not be prompted (no terminal, dialog failure).
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gpu-gate operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = GateError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GateError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn prompt_error_displays_message() {
        let err = GateError::Prompt {
            message: "not a terminal".into(),
        };
        assert!(err.to_string().contains("not a terminal"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: GateError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
