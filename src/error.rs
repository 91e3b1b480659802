//! Library error type

use thiserror::Error;

/// Errors raised by the form API itself.
///
/// Field validation failures are not errors in this sense: they land in the
/// form's error state and make [`check`](crate::FormHandle::check) resolve to
/// `None`.
#[derive(Debug, Error)]
pub enum FormError {
    /// A write targeted a name the form does not declare
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// Validated values could not be converted into the requested type
    #[error("failed to convert form values: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Reading or writing the configuration file failed
    #[error("configuration error: {0}")]
    Config(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`FormConfig`](crate::config::FormConfig)
    #[error("invalid configuration: {0}")]
    ConfigParse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message() {
        let err = FormError::UnknownField("age".to_string());
        assert_eq!(err.to_string(), "unknown field `age`");
    }

    #[test]
    fn test_deserialize_from_serde_error() {
        let serde_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err: FormError = serde_err.into();
        assert!(matches!(err, FormError::Deserialize(_)));
        assert!(err.to_string().starts_with("failed to convert form values"));
    }

    #[test]
    fn test_config_parse_message() {
        let serde_err = serde_json::from_str::<u32>("{").unwrap_err();
        let err = FormError::ConfigParse(serde_err);
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
