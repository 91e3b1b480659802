//! Numeric schema

use super::{format_bound, Issue, IssueCode, Schema, SchemaError};
use serde_json::{Number, Value};
use validator::ValidateRange;

/// Accepts JSON numbers. With [`coerce`](NumberSchema::coerce), strings,
/// booleans and `null` are converted first (`""` and `null` become `0`).
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    coerce: bool,
    int: bool,
    min: Option<f64>,
    max: Option<f64>,
}

pub fn number() -> NumberSchema {
    NumberSchema::default()
}

impl NumberSchema {
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    /// Reject values with a fractional part
    pub fn int(mut self) -> Self {
        self.int = true;
        self
    }

    /// Inclusive lower bound
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    fn read(&self, value: &Value) -> Result<f64, Issue> {
        let n = match value {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) if self.coerce => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
            Value::Bool(b) if self.coerce => f64::from(u8::from(*b)),
            Value::Null if self.coerce => 0.0,
            other => return Err(Issue::invalid_type("number", other)),
        };

        if n.is_finite() {
            Ok(n)
        } else {
            Err(Issue::new(
                IssueCode::InvalidType,
                "Expected number, received nan",
            ))
        }
    }
}

impl Schema for NumberSchema {
    fn safe_parse(&self, value: &Value) -> Result<Value, SchemaError> {
        let n = self.read(value).map_err(SchemaError::single)?;

        let mut issues = Vec::new();
        if self.int && n.fract() != 0.0 {
            issues.push(Issue::new(
                IssueCode::NotInteger,
                "Expected integer, received float",
            ));
        }
        if let Some(min) = self.min {
            if !n.validate_range(Some(min), None, None, None) {
                issues.push(Issue::new(
                    IssueCode::TooSmall,
                    format!(
                        "Number must be greater than or equal to {}",
                        format_bound(min)
                    ),
                ));
            }
        }
        if let Some(max) = self.max {
            if !n.validate_range(None, Some(max), None, None) {
                issues.push(Issue::new(
                    IssueCode::TooBig,
                    format!("Number must be less than or equal to {}", format_bound(max)),
                ));
            }
        }

        if !issues.is_empty() {
            return Err(SchemaError::new(issues));
        }

        Ok(to_value(n))
    }
}

/// Whole numbers come back as JSON integers so `18` stays `18`, not `18.0`
fn to_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_numbers() {
        assert_eq!(number().safe_parse(&json!(42)), Ok(json!(42)));
        assert_eq!(number().safe_parse(&json!(1.5)), Ok(json!(1.5)));
    }

    #[test]
    fn test_rejects_strings_without_coerce() {
        let err = number().safe_parse(&json!("42")).unwrap_err();
        assert_eq!(err.first_message(), "Expected number, received string");
    }

    #[test]
    fn test_coerce_parses_strings() {
        let schema = number().coerce();
        assert_eq!(schema.safe_parse(&json!(" 42 ")), Ok(json!(42)));
        assert_eq!(schema.safe_parse(&json!("")), Ok(json!(0)));
        assert_eq!(schema.safe_parse(&json!(true)), Ok(json!(1)));
        assert_eq!(schema.safe_parse(&Value::Null), Ok(json!(0)));
    }

    #[test]
    fn test_coerce_reports_nan() {
        let err = number().coerce().safe_parse(&json!("abc")).unwrap_err();
        assert_eq!(err.first_message(), "Expected number, received nan");
    }

    #[test]
    fn test_int() {
        let err = number().int().safe_parse(&json!(2.5)).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::NotInteger);
        assert!(number().int().safe_parse(&json!(2)).is_ok());
    }

    #[test]
    fn test_bounds() {
        let schema = number().min(18.0).max(120.0);
        assert_eq!(
            schema.safe_parse(&json!(17)).unwrap_err().first_message(),
            "Number must be greater than or equal to 18"
        );
        assert_eq!(
            schema.safe_parse(&json!(121)).unwrap_err().first_message(),
            "Number must be less than or equal to 120"
        );
        assert_eq!(schema.safe_parse(&json!(18)), Ok(json!(18)));
        assert_eq!(schema.safe_parse(&json!(120)), Ok(json!(120)));
    }
}
