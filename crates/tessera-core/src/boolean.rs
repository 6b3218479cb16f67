//! # Boolean and Null Values
//!
//! [`BoolValue`] has no empty state: only a boolean native is accepted.
//! [`NullValue`] is the opposite: it is always empty and only accepts null
//! (or the empty string).

use crate::error::ValidationError;
use crate::native::Native;
use crate::value::{native_serde, MakeEmpty, ValueObject};

/// An immutable boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoolValue(bool);

impl BoolValue {
    /// Wrap a boolean.
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    /// The `true` value.
    pub fn true_value() -> Self {
        Self(true)
    }

    /// The `false` value.
    pub fn false_value() -> Self {
        Self(false)
    }

    /// Whether the value is `true`.
    pub fn is_true(&self) -> bool {
        self.0
    }

    /// Whether the value is `false`.
    pub fn is_false(&self) -> bool {
        !self.0
    }

    /// A new value holding the logical negation.
    pub fn negate(&self) -> Self {
        Self(!self.0)
    }
}

impl ValueObject for BoolValue {
    const TYPE_NAME: &'static str = "BoolValue";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match native {
            Native::Bool(b) => Ok(Self(*b)),
            other => Err(ValidationError::unsupported(Self::TYPE_NAME, "boolean", other)),
        }
    }

    fn to_native(&self) -> Native {
        Native::Bool(self.0)
    }
}

impl std::fmt::Display for BoolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0 { "true" } else { "false" })
    }
}

native_serde!(BoolValue);

/// The null value. Every instance is empty and equal to every other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullValue;

impl ValueObject for NullValue {
    const TYPE_NAME: &'static str = "NullValue";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match native {
            Native::Null => Ok(Self),
            Native::String(s) if s.is_empty() => Ok(Self),
            other => Err(ValidationError::new(
                Self::TYPE_NAME,
                "null or empty string",
                format!("unsupported native {other}"),
            )),
        }
    }

    fn to_native(&self) -> Native {
        Native::Null
    }

    fn is_empty(&self) -> bool {
        true
    }
}

impl MakeEmpty for NullValue {
    fn make_empty() -> Self {
        Self
    }
}

impl std::fmt::Display for NullValue {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

native_serde!(NullValue);
