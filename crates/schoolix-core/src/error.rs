//! Error types for the Schoolix application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::RemoteError;

/// A shared error type for the entire Schoolix application.
///
/// Remote model failures keep their own [`RemoteError`] so the retry wrapper
/// can classify them; everything else collapses into a message-carrying variant.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SchoolixError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote model call failed
    #[error("Remote error: {0}")]
    Remote(RemoteError),
}

impl SchoolixError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for SchoolixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SchoolixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SchoolixError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<RemoteError> for SchoolixError {
    fn from(err: RemoteError) -> Self {
        Self::Remote(err)
    }
}

/// A type alias for `Result<T, SchoolixError>`.
pub type Result<T> = std::result::Result<T, SchoolixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: SchoolixError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: SchoolixError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, SchoolixError::Serialization { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_remote_error_conversion() {
        let err: SchoolixError = RemoteError::new(Some(503), "unavailable").into();
        assert!(matches!(err, SchoolixError::Remote(ref remote) if remote.is_transient()));
    }
}
