//! # Identifier Values
//!
//! [`Uuid`] wraps a `uuid::Uuid` and adds an empty state. Its native form is
//! the lowercase hyphenated string; empty UUIDs have a null native and render
//! as `"null"`.

use crate::error::ValidationError;
use crate::native::{optional_nonempty_str, Native};
use crate::value::{native_serde, MakeEmpty, ValueObject};

/// A UUID, or empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uuid(Option<uuid::Uuid>);

impl Uuid {
    /// Create a new random (v4) identifier.
    pub fn generate() -> Self {
        Self(Some(uuid::Uuid::new_v4()))
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(Some(id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> Option<&uuid::Uuid> {
        self.0.as_ref()
    }
}

impl ValueObject for Uuid {
    const TYPE_NAME: &'static str = "Uuid";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        const EXPECTED: &str = "UUID string or null";
        match optional_nonempty_str(native, Self::TYPE_NAME, EXPECTED)? {
            Some(s) => uuid::Uuid::parse_str(s)
                .map(Self::from_uuid)
                .map_err(|e| ValidationError::new(Self::TYPE_NAME, EXPECTED, format!("{s:?}: {e}"))),
            None => Ok(Self(None)),
        }
    }

    fn to_native(&self) -> Native {
        self.0
            .map_or(Native::Null, |id| Native::String(id.hyphenated().to_string()))
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl MakeEmpty for Uuid {
    fn make_empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Display for Uuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id.hyphenated()),
            None => f.write_str("null"),
        }
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(id: uuid::Uuid) -> Self {
        Self::from_uuid(id)
    }
}

native_serde!(Uuid);
