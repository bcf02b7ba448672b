//! Layout configuration
//!
//! Spacing and label settings for the diagram builder. Every field falls
//! back to the value in [`crate::constants::defaults`] when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::error::{DiagramError, Result};

/// Geometry and label settings used when placing nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Horizontal distance between consecutive task nodes
    pub task_spacing: f64,
    /// Vertical distance between rows
    pub row_spacing: f64,
    /// Width of one agent/tool column
    pub column_width: f64,
    /// Number of description characters kept in a task label
    pub label_max_chars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            task_spacing: defaults::TASK_SPACING,
            row_spacing: defaults::ROW_SPACING,
            column_width: defaults::COLUMN_WIDTH,
            label_max_chars: defaults::LABEL_MAX_CHARS,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::info!("Loaded layout config from {:?}", path);
        Ok(config)
    }

    /// Check that spacings are positive and finite and labels keep at least one character
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("taskSpacing", self.task_spacing),
            ("rowSpacing", self.row_spacing),
            ("columnWidth", self.column_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DiagramError::invalid_config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.label_max_chars == 0 {
            return Err(DiagramError::invalid_config("labelMaxChars must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.task_spacing, 300.0);
        assert_eq!(config.row_spacing, 150.0);
        assert_eq!(config.column_width, 220.0);
        assert_eq!(config.label_max_chars, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = LayoutConfig::from_json_str(r#"{"rowSpacing": 200}"#)
            .unwrap();
        assert_eq!(config.row_spacing, 200.0);
        assert_eq!(config.task_spacing, 300.0);
        assert_eq!(config.label_max_chars, 50);
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        let err = LayoutConfig::from_json_str(r#"{"columnWidth": 0}"#)
            .unwrap_err();
        assert!(matches!(err, DiagramError::InvalidConfig(_)));
        assert!(err.to_string().contains("columnWidth"));
    }

    #[test]
    fn test_rejects_zero_label_limit() {
        let config = LayoutConfig {
            label_max_chars: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DiagramError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_nan_spacing() {
        let config = LayoutConfig {
            task_spacing: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"taskSpacing": 400, "labelMaxChars": 20}}"#)
            .unwrap();

        let config = LayoutConfig::load(file.path()).unwrap();
        assert_eq!(config.task_spacing, 400.0);
        assert_eq!(config.label_max_chars, 20);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LayoutConfig::load(dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, DiagramError::Io(_)));
    }
}
