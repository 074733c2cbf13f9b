//! Error types for mediapack

use std::fmt;

/// Main error type for mediapack operations
#[derive(Debug)]
pub enum MediaPackageError {
    /// Flavor string does not follow the `type/subtype` contract
    MalformedFlavor(String),

    /// JSON serialization error
    JsonError(serde_json::Error),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for MediaPackageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaPackageError::MalformedFlavor(msg) => write!(f, "Malformed flavor: {msg}"),
            MediaPackageError::JsonError(err) => write!(f, "JSON error: {err}"),
            MediaPackageError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MediaPackageError {}

impl From<serde_json::Error> for MediaPackageError {
    fn from(err: serde_json::Error) -> Self {
        MediaPackageError::JsonError(err)
    }
}

impl From<anyhow::Error> for MediaPackageError {
    fn from(err: anyhow::Error) -> Self {
        MediaPackageError::Generic(err.to_string())
    }
}

/// Result type for mediapack operations
pub type Result<T> = std::result::Result<T, MediaPackageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_flavor_display() {
        let err =
            MediaPackageError::MalformedFlavor("'presenter' is missing a separator".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed flavor: 'presenter' is missing a separator"
        );
    }

    #[test]
    fn test_anyhow_conversion_keeps_message() {
        let err: MediaPackageError = anyhow::anyhow!("registry unavailable").into();
        assert_eq!(err.to_string(), "registry unavailable");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: MediaPackageError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
