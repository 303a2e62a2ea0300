//! Error types for the Jibun Timer application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Jibun Timer application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum JibunError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// Configuration error (missing config dir, malformed config.toml, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The advice collaborator (Gemini) failed or returned an unusable response
    #[error("Advice request failed: {0}")]
    Advice(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JibunError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Advice error
    pub fn advice(message: impl Into<String>) -> Self {
        Self::Advice(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is an advice error
    pub fn is_advice(&self) -> bool {
        matches!(self, Self::Advice(_))
    }
}

impl From<std::io::Error> for JibunError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for JibunError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for JibunError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for JibunError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, JibunError>`.
pub type Result<T> = std::result::Result<T, JibunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: JibunError = io.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_from_json_error() {
        let bad = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: JibunError = bad.into();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_advice_helper() {
        let err = JibunError::advice("upstream 500");
        assert!(err.is_advice());
        assert!(err.to_string().contains("upstream 500"));
    }
}
