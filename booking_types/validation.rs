//! Field-level validation rules.
//!
//! Every rule is a plain function that inspects one value and returns
//! `Some(Violation)` when the value is unacceptable. Requests fold their
//! rules with [`ValidationErrors::collect`].

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A non-empty set of violations for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Validation failed: {}", summary(.0))]
pub struct ValidationErrors(Vec<Violation>);

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Runs a set of rule outcomes and fails if any of them produced a violation.
    pub fn collect<I>(outcomes: I) -> Result<(), ValidationErrors>
    where
        I: IntoIterator<Item = Option<Violation>>,
    {
        let violations: Vec<Violation> = outcomes.into_iter().flatten().collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Vec<Violation>> for ValidationErrors {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

/// The value must contain something other than whitespace.
pub fn required(field: &'static str, value: &str) -> Option<Violation> {
    value
        .trim()
        .is_empty()
        .then(|| Violation::new(field, format!("{field} is required")))
}

/// Identifiers must be assigned (the nil UUID counts as missing).
pub fn required_id(field: &'static str, value: &Uuid) -> Option<Violation> {
    value
        .is_nil()
        .then(|| Violation::new(field, format!("{field} is required")))
}

pub fn positive(field: &'static str, value: i32) -> Option<Violation> {
    (value <= 0).then(|| Violation::new(field, format!("{field} must be greater than 0")))
}

/// Cheap shape check: one `@` with text on both sides and a dot in the domain.
pub fn email(field: &'static str, value: &str) -> Option<Violation> {
    let value = value.trim();
    if value.is_empty() {
        // reported by `required`
        return None;
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.contains('.')
        }
        None => false,
    };
    (!valid).then(|| Violation::new(field, format!("{field} is not a valid email address")))
}

/// Generic rule for conditions that don't fit the helpers above.
pub fn check(condition: bool, field: &'static str, message: &str) -> Option<Violation> {
    (!condition).then(|| Violation::new(field, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank_values() {
        assert!(required("name", "").is_some());
        assert!(required("name", "   \t").is_some());
        assert!(required("name", "JFK Intl").is_none());
    }

    #[test]
    fn test_required_id_rejects_nil() {
        assert!(required_id("id", &Uuid::nil()).is_some());
        assert!(required_id("id", &Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_email_shape() {
        assert!(email("email", "traveller@example.com").is_none());
        assert!(email("email", "").is_none());
        assert!(email("email", "traveller").is_some());
        assert!(email("email", "@example.com").is_some());
        assert!(email("email", "a@b@example.com").is_some());
        assert!(email("email", "traveller@localhost").is_some());
    }

    #[test]
    fn test_collect_keeps_every_violation() {
        let result = ValidationErrors::collect([
            required("name", ""),
            required("address", "NYC"),
            required("code", " "),
            positive("age", 0),
        ]);

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("code"));
        assert!(errors.has_field("age"));
        assert!(!errors.has_field("address"));
        assert!(errors.to_string().starts_with("Validation failed: name"));
    }

    #[test]
    fn test_collect_passes_when_all_rules_hold() {
        let result = ValidationErrors::collect([
            required("name", "JFK Intl"),
            check(true, "code", "unused"),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_violations_serialize_as_field_message_pairs() {
        let json = serde_json::to_value(Violation::new("code", "code is required")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "field": "code", "message": "code is required" })
        );
    }
}
