//! Boolean schema

use super::{Issue, IssueCode, Schema, SchemaError};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    required_true: Option<String>,
}

pub fn boolean() -> BooleanSchema {
    BooleanSchema::default()
}

impl BooleanSchema {
    /// Only `true` passes; `false` is reported with `message`
    pub fn must_be_true(mut self, message: impl Into<String>) -> Self {
        self.required_true = Some(message.into());
        self
    }
}

impl Schema for BooleanSchema {
    fn safe_parse(&self, value: &Value) -> Result<Value, SchemaError> {
        let Value::Bool(b) = value else {
            return Err(SchemaError::single(Issue::invalid_type("boolean", value)));
        };

        match &self.required_true {
            Some(message) if !b => Err(SchemaError::single(Issue::new(
                IssueCode::Custom,
                message.clone(),
            ))),
            _ => Ok(Value::Bool(*b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_booleans() {
        assert_eq!(boolean().safe_parse(&json!(false)), Ok(json!(false)));
        assert_eq!(boolean().safe_parse(&json!(true)), Ok(json!(true)));
    }

    #[test]
    fn test_rejects_other_types() {
        let err = boolean().safe_parse(&json!("true")).unwrap_err();
        assert_eq!(err.first_message(), "Expected boolean, received string");
    }

    #[test]
    fn test_must_be_true() {
        let schema = boolean().must_be_true("Accept the terms");
        assert_eq!(
            schema.safe_parse(&json!(false)).unwrap_err().first_message(),
            "Accept the terms"
        );
        assert!(schema.safe_parse(&json!(true)).is_ok());
    }
}
