//! # Error Types
//!
//! Defines the error types raised by value objects and the collections built
//! on top of them. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - Construction failures carry the value type, the expected native shape,
//!   and the reason the input was rejected.
//! - Collection failures carry the collection description (for example
//!   `ValueObjectList<Date>`) so the offending call site is obvious.
//! - Every error is raised synchronously by the call that triggers it. Nothing
//!   in this workspace mutates state before failing, so there is no partial
//!   failure to recover from.

use thiserror::Error;

/// Top-level error type for value objects and typed collections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Malformed or out-of-domain native input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A value object of the wrong concrete type was supplied.
    #[error("invalid type given to {context}: expected {expected}, got {actual}")]
    InvalidType {
        /// The collection or value that rejected the argument.
        context: String,
        /// The declared type name.
        expected: String,
        /// The type name that was actually supplied.
        actual: String,
    },

    /// An access or replacement targeted an absent position or item.
    #[error("out of range in {context}: {reason}")]
    OutOfRange {
        /// The collection that was accessed.
        context: String,
        /// What was missing.
        reason: String,
    },

    /// A map lookup targeted an absent key.
    #[error("key \"{key}\" not found in {context}")]
    KeyNotFound {
        /// The map that was accessed.
        context: String,
        /// The missing key.
        key: String,
    },

    /// An operation that needs a concrete payload was invoked on an empty value.
    #[error("{type_name} is empty; {operation} requires a value")]
    EmptyState {
        /// The value type.
        type_name: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },
}

impl ValueError {
    /// Shorthand for an [`ValueError::EmptyState`] error.
    pub fn empty_state(type_name: &'static str, operation: &'static str) -> Self {
        Self::EmptyState {
            type_name,
            operation,
        }
    }
}

/// Construction-time validation failure.
///
/// Carries the invalid input description and the expected shape so that a
/// caller can diagnose bad data without guesswork.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid {type_name}: {reason} (expected {expected})")]
pub struct ValidationError {
    /// The value type that rejected the input.
    pub type_name: &'static str,
    /// The accepted native shape, in prose.
    pub expected: &'static str,
    /// Why this particular input was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(type_name: &'static str, expected: &'static str, reason: impl Into<String>) -> Self {
        Self {
            type_name,
            expected,
            reason: reason.into(),
        }
    }

    /// A native value of the wrong primitive kind was supplied.
    pub fn unsupported(
        type_name: &'static str,
        expected: &'static str,
        native: &crate::Native,
    ) -> Self {
        Self::new(
            type_name,
            expected,
            format!("unsupported native {}", crate::native::kind_of(native)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_error_names_expected_shape() {
        let err = ValidationError::new("Natural", "integer >= 0", "must be at least 0, got -1");
        let msg = err.to_string();
        assert!(msg.contains("Natural"));
        assert!(msg.contains("integer >= 0"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn unsupported_reports_native_kind() {
        let err = ValidationError::unsupported("BoolValue", "boolean", &json!("yes"));
        assert!(err.reason.contains("string"));
    }

    #[test]
    fn value_error_wraps_validation() {
        let inner = ValidationError::new("Range", "[start, end]", "end before start");
        let err: ValueError = inner.clone().into();
        assert_eq!(err, ValueError::Validation(inner));
        assert!(err.to_string().starts_with("validation error"));
    }

    #[test]
    fn invalid_type_display() {
        let err = ValueError::InvalidType {
            context: "ValueObjectList<Date>".to_string(),
            expected: "Date".to_string(),
            actual: "Text".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ValueObjectList<Date>"));
        assert!(msg.contains("expected Date"));
        assert!(msg.contains("got Text"));
    }

    #[test]
    fn key_not_found_display() {
        let err = ValueError::KeyNotFound {
            context: "ValueObjectMap<Date>".to_string(),
            key: "missing".to_string(),
        };
        assert!(err.to_string().contains("\"missing\""));
    }

    #[test]
    fn empty_state_display() {
        let err = ValueError::empty_state("IntValue", "add");
        assert_eq!(err.to_string(), "IntValue is empty; add requires a value");
    }
}
