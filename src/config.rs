//! Configuration handling for the form renderer

use crate::error::FormError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracing filter when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_FILTER: &str = "form_builder=info";

/// User configuration, stored as JSON in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Color of the focused field (any ratatui color name or `#rrggbb`)
    pub accent_color: Option<String>,
    /// Color of validation messages
    pub error_color: Option<String>,
    /// Text shown for an empty, unfocused field
    pub empty_placeholder: Option<String>,
    /// Glyph drawn after the value of the focused field
    pub cursor: Option<String>,
    /// Tracing filter directive for the binary
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "form-builder", "form-builder-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, FormError> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                let config = Self::from_json(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse configuration file contents
    pub fn from_json(content: &str) -> Result<Self, FormError> {
        serde_json::from_str(content).map_err(FormError::ConfigParse)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), FormError> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self).map_err(FormError::ConfigParse)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.accent_color.is_none());
        assert!(config.error_color.is_none());
        assert!(config.empty_placeholder.is_none());
        assert!(config.cursor.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            accent_color: Some("yellow".to_string()),
            error_color: Some("#ff0000".to_string()),
            empty_placeholder: Some("-".to_string()),
            cursor: Some("_".to_string()),
            log_filter: Some("form_builder=debug".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.accent_color, Some("yellow".to_string()));
        assert_eq!(parsed.error_color, Some("#ff0000".to_string()));
        assert_eq!(parsed.empty_placeholder, Some("-".to_string()));
        assert_eq!(parsed.cursor, Some("_".to_string()));
        assert_eq!(parsed.log_filter(), "form_builder=debug");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.accent_color.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown keys are ignored
        let json = r#"{"accent_color": "green", "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.accent_color, Some("green".to_string()));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = FormConfig::from_json("{ \"accent_color\": ").unwrap_err();
        assert!(matches!(err, FormError::ConfigParse(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = FormConfig::from_json(r#"{"cursor": 3}"#).unwrap_err();
        assert!(matches!(err, FormError::ConfigParse(_)));
    }

    #[test]
    fn test_from_json_reads_fields() {
        let config = FormConfig::from_json(r#"{"cursor": "_"}"#).unwrap();
        assert_eq!(config.cursor.as_deref(), Some("_"));
    }

    #[test]
    fn test_load_returns_ok_without_file() {
        // May read a real config file if one exists; either way it must parse or default
        assert!(FormConfig::load().is_ok());
    }
}
