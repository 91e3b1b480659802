//! Field validation schemas
//!
//! A [`Schema`] parses a field's current value and either returns the parsed
//! (possibly coerced or transformed) value or a [`SchemaError`] listing every
//! issue it found. Forms only ever surface the first issue's message.
//!
//! The stock schemas built here delegate their primitive checks (lengths,
//! ranges, email and url syntax) to the `validator` crate:
//! - `string`: text with length, format and custom checks
//! - `number`: numeric values, optionally coerced from text
//! - `boolean`: plain booleans
//! - [`optional`]: lets `null` through any other schema

mod boolean;
mod number;
mod string;

use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub use boolean::{boolean, BooleanSchema};
pub use number::{number, NumberSchema};
pub use string::{string, StringSchema};

/// Per-field validation rule
#[cfg_attr(test, mockall::automock)]
pub trait Schema {
    /// Parse `value`, returning the parsed value or every issue found
    fn safe_parse(&self, value: &Value) -> Result<Value, SchemaError>;
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    fn safe_parse(&self, value: &Value) -> Result<Value, SchemaError> {
        (**self).safe_parse(value)
    }
}

/// Machine-readable category of an [`Issue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    TooBig,
    InvalidString,
    NotInteger,
    Custom,
}

/// One problem reported by a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// `Expected <expected>, received <actual type of value>`
    pub fn invalid_type(expected: &str, value: &Value) -> Self {
        Self::new(
            IssueCode::InvalidType,
            format!("Expected {expected}, received {}", type_name(value)),
        )
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failed parse, carrying issues in the order the checks ran
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", first_message(.issues))]
pub struct SchemaError {
    pub issues: Vec<Issue>,
}

impl SchemaError {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn single(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Message of the first issue, the one forms display
    pub fn first_message(&self) -> &str {
        first_message(&self.issues)
    }
}

fn first_message(issues: &[Issue]) -> &str {
    issues
        .first()
        .map(|issue| issue.message.as_str())
        .unwrap_or("Invalid input")
}

/// Wraps a schema so that `null` passes through untouched
pub struct Optional<S> {
    inner: S,
}

pub fn optional<S: Schema>(inner: S) -> Optional<S> {
    Optional { inner }
}

impl<S: Schema> Schema for Optional<S> {
    fn safe_parse(&self, value: &Value) -> Result<Value, SchemaError> {
        match value {
            Value::Null => Ok(Value::Null),
            other => self.inner.safe_parse(other),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a bound the way messages show it: `5`, not `5.0`
fn format_bound(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
