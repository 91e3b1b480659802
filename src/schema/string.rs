//! Text schema

use super::{Issue, IssueCode, Schema, SchemaError};
use serde_json::Value;
use std::rc::Rc;
use validator::{ValidateEmail, ValidateLength, ValidateUrl};

#[derive(Clone)]
enum StringCheck {
    Min(u64),
    Max(u64),
    Email,
    Url,
    Refine(Rc<dyn Fn(&str) -> bool>, String),
}

impl StringCheck {
    fn check(&self, text: &str) -> Option<Issue> {
        match self {
            StringCheck::Min(min) => (!text.validate_length(Some(*min), None, None)).then(|| {
                Issue::new(
                    IssueCode::TooSmall,
                    format!("String must contain at least {min} character(s)"),
                )
            }),
            StringCheck::Max(max) => (!text.validate_length(None, Some(*max), None)).then(|| {
                Issue::new(
                    IssueCode::TooBig,
                    format!("String must contain at most {max} character(s)"),
                )
            }),
            StringCheck::Email => (!text.validate_email())
                .then(|| Issue::new(IssueCode::InvalidString, "Invalid email")),
            StringCheck::Url => {
                (!text.validate_url()).then(|| Issue::new(IssueCode::InvalidString, "Invalid url"))
            }
            StringCheck::Refine(predicate, message) => {
                (!predicate(text)).then(|| Issue::new(IssueCode::Custom, message.clone()))
            }
        }
    }
}

/// Accepts JSON strings; checks run in the order they were added and every
/// failing check is reported.
#[derive(Clone, Default)]
pub struct StringSchema {
    trim: bool,
    checks: Vec<StringCheck>,
}

pub fn string() -> StringSchema {
    StringSchema::default()
}

impl StringSchema {
    /// At least `min` characters.
    ///
    /// Length is counted in Unicode scalar values (`char`s), not UTF-16
    /// code units: a character outside the Basic Multilingual Plane such as
    /// `😀` counts once, where UTF-16 based validators count it twice.
    pub fn min(mut self, min: u64) -> Self {
        self.checks.push(StringCheck::Min(min));
        self
    }

    /// At most `max` characters, counted like [`min`](Self::min)
    pub fn max(mut self, max: u64) -> Self {
        self.checks.push(StringCheck::Max(max));
        self
    }

    pub fn non_empty(self) -> Self {
        self.min(1)
    }

    pub fn email(mut self) -> Self {
        self.checks.push(StringCheck::Email);
        self
    }

    pub fn url(mut self) -> Self {
        self.checks.push(StringCheck::Url);
        self
    }

    /// Strip surrounding whitespace before checking; the parsed value is
    /// the trimmed text
    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Custom predicate reported with `message` when it returns false
    pub fn refine(
        mut self,
        predicate: impl Fn(&str) -> bool + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.checks
            .push(StringCheck::Refine(Rc::new(predicate), message.into()));
        self
    }
}

impl Schema for StringSchema {
    fn safe_parse(&self, value: &Value) -> Result<Value, SchemaError> {
        let Value::String(raw) = value else {
            return Err(SchemaError::single(Issue::invalid_type("string", value)));
        };

        let text = if self.trim { raw.trim() } else { raw.as_str() };

        let issues: Vec<Issue> = self
            .checks
            .iter()
            .filter_map(|check| check.check(text))
            .collect();

        if issues.is_empty() {
            Ok(Value::String(text.to_string()))
        } else {
            Err(SchemaError::new(issues))
        }
    }
}
