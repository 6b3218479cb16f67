//! # Text
//!
//! A plain string value. The empty string is the empty state; a null native
//! is accepted and folded into it.

use crate::error::ValidationError;
use crate::native::{optional_str, Native};
use crate::value::{native_serde, MakeEmpty, ValueObject};

/// An immutable string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    /// Create a text value. Any string is valid.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl ValueObject for Text {
    const TYPE_NAME: &'static str = "Text";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        let value = optional_str(native, Self::TYPE_NAME, "string or null")?;
        Ok(Self(value.unwrap_or_default().to_string()))
    }

    fn to_native(&self) -> Native {
        Native::String(self.0.clone())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl MakeEmpty for Text {
    fn make_empty() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

native_serde!(Text);
