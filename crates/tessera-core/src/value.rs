//! # Value Object Contract
//!
//! Every value type implements [`ValueObject`]: construction from a
//! [`Native`] (the only place validation happens), conversion back to its
//! canonical native, structural equality, and a `Display` rendering. Types
//! that model absence as a first-class state also implement [`MakeEmpty`].
//!
//! [`AnyValueObject`] is the object-safe, type-erased view of the same
//! contract. It is blanket-implemented for every `ValueObject` and is what
//! runtime type checks (and callers that only learn a type name at runtime)
//! go through.
//!
//! ## Round-trip law
//!
//! For every non-empty `x`, `T::from_native(&x.to_native())` equals `x`.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use crate::error::{ValidationError, ValueError};
use crate::native::Native;

/// An immutable unit of domain data compared by content.
pub trait ValueObject: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Construct from a native value, validating type and domain constraints.
    fn from_native(native: &Native) -> Result<Self, ValidationError>;

    /// The canonical native representation.
    fn to_native(&self) -> Native;

    /// Structural equality: two values are equal iff their natives are.
    fn equals(&self, other: &Self) -> bool {
        self.to_native() == other.to_native()
    }

    /// Whether this is the designated empty instance of its type.
    fn is_empty(&self) -> bool {
        false
    }

    /// Full diagnostic name. Generic containers include their element type,
    /// e.g. `ValueObjectList<Date>`; everything else uses [`Self::TYPE_NAME`].
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed(Self::TYPE_NAME)
    }
}

/// Value types with a first-class empty state.
pub trait MakeEmpty: ValueObject {
    /// The empty instance.
    fn make_empty() -> Self;
}

/// Fail with [`ValueError::EmptyState`] if `value` is empty.
pub(crate) fn require_value<T: ValueObject>(
    value: &T,
    operation: &'static str,
) -> Result<(), ValueError> {
    if value.is_empty() {
        Err(ValueError::empty_state(T::TYPE_NAME, operation))
    } else {
        Ok(())
    }
}

/// Object-safe, type-erased view of a [`ValueObject`].
pub trait AnyValueObject: fmt::Debug + fmt::Display + Send + Sync {
    /// The concrete type's [`ValueObject::type_label`].
    fn type_name(&self) -> Cow<'static, str>;

    /// The canonical native representation.
    fn native_value(&self) -> Native;

    /// Whether the value is empty.
    fn is_empty_value(&self) -> bool;

    /// Access as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Compare with another erased value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidType`] if `other` is a different concrete
    /// type.
    fn equals_any(&self, other: &dyn AnyValueObject) -> Result<bool, ValueError>;
}

impl<T: ValueObject> AnyValueObject for T {
    fn type_name(&self) -> Cow<'static, str> {
        T::type_label()
    }

    fn native_value(&self) -> Native {
        self.to_native()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals_any(&self, other: &dyn AnyValueObject) -> Result<bool, ValueError> {
        let other = downcast_value::<T>(other, &T::type_label())?;
        Ok(self.equals(other))
    }
}

/// Downcast an erased value to `T`, or fail with [`ValueError::InvalidType`]
/// naming `context` as the rejecting party.
pub fn downcast_value<'a, T: ValueObject>(
    value: &'a dyn AnyValueObject,
    context: &str,
) -> Result<&'a T, ValueError> {
    value
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| ValueError::InvalidType {
            context: context.to_string(),
            expected: T::type_label().into_owned(),
            actual: value.type_name().into_owned(),
        })
}

/// Implement `Serialize`/`Deserialize` through the native form so that serde
/// and `from_native`/`to_native` never disagree.
macro_rules! native_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&$crate::ValueObject::to_native(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let native = <$crate::Native as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::ValueObject>::from_native(&native).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use native_serde;
