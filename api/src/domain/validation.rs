//! Field-level validation
//!
//! Validators collect every violation they find instead of stopping at the
//! first one, so the transport layer can report all broken fields at once.

use std::str::FromStr;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Serialize;
use validator::{ValidateEmail, ValidateLength};

/// Rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    MaxLength,
    Pattern,
    Email,
    OneOf,
    Format,
    ExactlyOneRole,
    Immutable,
}

/// A single broken constraint on one field of a representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            message: message.into(),
        }
    }
}

/// Non-empty list of violations produced by a failed validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, rule: Rule, message: impl Into<String>) -> Self {
        Self(vec![FieldViolation::new(field, rule, message)])
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<FieldViolation> {
        self.0
    }

    /// Whether any violation was reported against `field`
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl From<Vec<FieldViolation>> for ValidationErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Accumulates violations while a representation is checked field by field.
///
/// Every check returns the accepted value, or `None` when the field is absent
/// or was rejected. A rejected field always leaves a violation behind.
#[derive(Debug, Default)]
pub struct Checker {
    violations: Vec<FieldViolation>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, rule: Rule, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, rule, message));
    }

    /// Required text: must be present, not blank, and at most `max` characters
    pub fn required_text(&mut self, field: &str, value: Option<&str>, max: usize) -> Option<String> {
        match value {
            Some(s) if !s.trim().is_empty() => self.bounded(field, s, max),
            _ => {
                self.reject(field, Rule::Required, "must not be blank");
                None
            }
        }
    }

    /// Optional text: blank counts as absent, otherwise at most `max` characters
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max: usize) -> Option<String> {
        match value {
            Some(s) if !s.trim().is_empty() => self.bounded(field, s, max),
            _ => None,
        }
    }

    fn bounded(&mut self, field: &str, value: &str, max: usize) -> Option<String> {
        let value = value.to_string();
        if !value.validate_length(None, Some(max as u64), None) {
            self.reject(
                field,
                Rule::MaxLength,
                format!("size must be between 0 and {}", max),
            );
            return None;
        }
        Some(value)
    }

    /// Any required non-text value
    pub fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.reject(field, Rule::Required, "must not be null");
        }
        value
    }

    /// Accepted text must match `pattern` in full
    pub fn pattern(
        &mut self,
        field: &str,
        value: Option<String>,
        pattern: &Regex,
        message: &str,
    ) -> Option<String> {
        let value = value?;
        if pattern.is_match(&value) {
            Some(value)
        } else {
            self.reject(field, Rule::Pattern, message);
            None
        }
    }

    /// Accepted text must be a well-formed email address
    pub fn email(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = value?;
        if value.validate_email() {
            Some(value)
        } else {
            self.reject(field, Rule::Email, "must be a well-formed email address");
            None
        }
    }

    /// Required value drawn from a fixed set; `allowed` is the `|`-joined set
    pub fn one_of<T: FromStr>(&mut self, field: &str, value: Option<&str>, allowed: &str) -> Option<T> {
        match value {
            Some(s) if !s.trim().is_empty() => match s.parse() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    self.reject(field, Rule::OneOf, format!("must match \"{}\"", allowed));
                    None
                }
            },
            _ => {
                self.reject(field, Rule::Required, "must not be blank");
                None
            }
        }
    }

    /// Optional timestamp written exactly in `format` (a chrono format string).
    ///
    /// The text must survive a parse/format round trip so that what is stored
    /// reads back byte for byte.
    pub fn date_time(
        &mut self,
        field: &str,
        value: Option<&str>,
        format: &str,
        display: &str,
    ) -> Option<NaiveDateTime> {
        let s = value.filter(|s| !s.trim().is_empty())?;
        match NaiveDateTime::parse_from_str(s, format) {
            Ok(parsed) if parsed.format(format).to_string() == s => Some(parsed),
            _ => {
                self.reject(
                    field,
                    Rule::Format,
                    format!("must match format {}", display),
                );
                None
            }
        }
    }

    /// Record a rule that the caller evaluated itself
    pub fn fail(&mut self, field: &str, rule: Rule, message: &str) {
        self.reject(field, rule, message);
    }

    /// Ok when nothing was rejected
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.violations))
        }
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.violations)
    }
}
