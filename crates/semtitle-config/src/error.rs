//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid TOML syntax or schema mismatch.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns true if no configuration file was found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/repo/semtitle.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /repo/semtitle.toml"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("title.decoration_marker must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: title.decoration_marker must not be empty"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_from() {
        let err: ConfigError = std::io::Error::other("denied").into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
