//! Error types for the diagram crate

use thiserror::Error;

/// Result type alias using DiagramError
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Errors that can occur while loading diagram inputs or layout settings
///
/// Laying out a diagram never fails; these only come from the loading
/// and configuration surfaces around it.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Layout configuration was rejected
    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),
}

impl DiagramError {
    /// Create an invalid config error with a message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = DiagramError::invalid_config("row spacing must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid layout config: row spacing must be positive"
        );
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: DiagramError = parse.unwrap_err().into();
        assert!(matches!(err, DiagramError::Serialization(_)));
    }
}
