//! # Collection Engine
//!
//! The machinery shared by [`ValueObjectList`](crate::ValueObjectList) and
//! [`ValueObjectMap`](crate::ValueObjectMap). Both are parameterized only by
//! their element type `T`; everything that depends on `T` alone (the element
//! factory, erased type checks, rendering, diagnostics naming) lives here.

use std::fmt;

use tessera_core::{downcast_value, kind_of, AnyValueObject, Native, ValidationError, ValueError, ValueObject};

/// Read access common to both collections.
///
/// `Key` is the position type: `usize` for lists, `str` for maps.
pub trait Collection {
    /// Position type used to address elements.
    type Key: ?Sized;
    /// The declared element type.
    type Item: ValueObject;

    /// Number of elements.
    fn count(&self) -> usize;

    /// Whether the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether an element exists at `key`. Never fails.
    fn has(&self, key: &Self::Key) -> bool;

    /// The element at `key`.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`] or [`ValueError::KeyNotFound`] when absent.
    fn get(&self, key: &Self::Key) -> Result<&Self::Item, ValueError>;
}

/// Diagnostic name of a collection bound to `T`, e.g. `ValueObjectList<Date>`.
/// Nested collections expand fully: `ValueObjectList<ValueObjectMap<Date>>`.
pub fn describe<T: ValueObject>(collection: &str) -> String {
    format!("{collection}<{}>", T::type_label())
}

/// Build one element through `T::from_native`, naming the offending
/// position on failure.
pub(crate) fn element_from_native<T: ValueObject>(
    collection: &'static str,
    expected: &'static str,
    position: impl fmt::Display,
    native: &Native,
) -> Result<T, ValidationError> {
    T::from_native(native).map_err(|e| {
        tracing::debug!(
            collection = %describe::<T>(collection),
            %position,
            native_kind = kind_of(native),
            "element rejected"
        );
        ValidationError::new(collection, expected, format!("element {position}: {e}"))
    })
}

/// Resolve an erased argument to the declared element type.
pub(crate) fn check_type<'a, T: ValueObject>(
    collection: &str,
    item: &'a dyn AnyValueObject,
) -> Result<&'a T, ValueError> {
    let context = describe::<T>(collection);
    downcast_value::<T>(item, &context).map_err(|e| {
        tracing::debug!(%context, actual = %item.type_name(), "erased argument rejected");
        e
    })
}

/// Write `key{sep}value` pairs joined by `", "`.
pub(crate) fn render<K, V, I>(f: &mut fmt::Formatter<'_>, sep: &str, pairs: I) -> fmt::Result
where
    K: fmt::Display,
    V: fmt::Display,
    I: IntoIterator<Item = (K, V)>,
{
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}{sep}{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_core::{Date, Text};

    #[test]
    fn describe_names_element_type() {
        assert_eq!(describe::<Date>("ValueObjectList"), "ValueObjectList<Date>");
    }

    #[test]
    fn element_error_names_position() {
        let err = element_from_native::<Date>("ValueObjectList", "sequence", 3, &json!("nope"))
            .unwrap_err();
        assert_eq!(err.type_name, "ValueObjectList");
        assert!(err.reason.starts_with("element 3:"));
        assert!(err.reason.contains("Date"));
    }

    #[test]
    fn check_type_rejects_other_types() {
        let text = Text::new("2020-01-01");
        let err = check_type::<Date>("ValueObjectMap", &text).unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidType {
                context: "ValueObjectMap<Date>".to_string(),
                expected: "Date".to_string(),
                actual: "Text".to_string(),
            }
        );
    }
}
