//! # Typed List
//!
//! [`ValueObjectList<T>`] is an ordered, zero-indexed sequence holding only
//! values of type `T`. It is persistent: every operation that would change
//! the list returns a new one, sharing structure with the receiver through
//! `im::Vector`, and the receiver stays observably unchanged.
//!
//! The typed methods enforce the element type at compile time. The `*_any`
//! methods accept erased values and check the type at runtime, failing with
//! [`ValueError::InvalidType`].

use std::borrow::Cow;
use std::fmt;

use im::Vector;
use tessera_core::{AnyValueObject, MakeEmpty, Native, ValidationError, ValueError, ValueObject};

use crate::engine::{self, Collection};

const NAME: &str = "ValueObjectList";
const EXPECTED: &str = "sequence of element natives, or null";

/// An immutable list of `T`.
#[derive(Debug, Clone)]
pub struct ValueObjectList<T: ValueObject> {
    items: Vector<T>,
}

impl<T: ValueObject> ValueObjectList<T> {
    /// Build a list from typed items, in order.
    pub fn wrap(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `index` addresses an element.
    pub fn has(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`] if there is no such element.
    pub fn get(&self, index: usize) -> Result<&T, ValueError> {
        self.items.get(index).ok_or_else(|| ValueError::OutOfRange {
            context: self.context(),
            reason: format!("index {index} (length {})", self.items.len()),
        })
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing.equals(item))
    }

    /// A new list with `item` appended.
    pub fn push(&self, item: T) -> Self {
        let mut items = self.items.clone();
        items.push_back(item);
        Self { items }
    }

    /// A new list with `item` prepended.
    pub fn unshift(&self, item: T) -> Self {
        let mut items = self.items.clone();
        items.push_front(item);
        Self { items }
    }

    /// A new list without the first element equal to `item`. Removing an
    /// absent item yields an equal list.
    pub fn remove(&self, item: &T) -> Self {
        let mut items = self.items.clone();
        if let Some(index) = self.index_of(item) {
            items.remove(index);
        }
        Self { items }
    }

    /// A new list with the first element equal to `item` replaced.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`] if `item` is not in the list.
    pub fn replace(&self, item: &T, replacement: T) -> Result<Self, ValueError> {
        let index = self.index_of(item).ok_or_else(|| ValueError::OutOfRange {
            context: self.context(),
            reason: format!("item \"{item}\" is not in the list"),
        })?;
        let mut items = self.items.clone();
        items.set(index, replacement);
        Ok(Self { items })
    }

    /// A new list in reverse order.
    pub fn reverse(&self) -> Self {
        Self {
            items: self.items.iter().rev().cloned().collect(),
        }
    }

    /// Iterate `(index, &item)` pairs in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter().enumerate()
    }

    /// The elements as a plain vector.
    pub fn unwrap(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }

    /// [`push`](Self::push) for an erased value.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidType`] if `item` is not a `T`.
    pub fn push_any(&self, item: &dyn AnyValueObject) -> Result<Self, ValueError> {
        Ok(self.push(engine::check_type::<T>(NAME, item)?.clone()))
    }

    /// [`unshift`](Self::unshift) for an erased value.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidType`] if `item` is not a `T`.
    pub fn unshift_any(&self, item: &dyn AnyValueObject) -> Result<Self, ValueError> {
        Ok(self.unshift(engine::check_type::<T>(NAME, item)?.clone()))
    }

    /// [`remove`](Self::remove) for an erased value.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidType`] if `item` is not a `T`.
    pub fn remove_any(&self, item: &dyn AnyValueObject) -> Result<Self, ValueError> {
        Ok(self.remove(engine::check_type::<T>(NAME, item)?))
    }

    /// [`replace`](Self::replace) for erased values.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidType`] if either argument is not a `T`;
    /// [`ValueError::OutOfRange`] if `item` is not in the list.
    pub fn replace_any(
        &self,
        item: &dyn AnyValueObject,
        replacement: &dyn AnyValueObject,
    ) -> Result<Self, ValueError> {
        let item = engine::check_type::<T>(NAME, item)?;
        let replacement = engine::check_type::<T>(NAME, replacement)?;
        self.replace(item, replacement.clone())
    }

    /// [`index_of`](Self::index_of) for an erased value.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidType`] if `item` is not a `T`.
    pub fn index_of_any(&self, item: &dyn AnyValueObject) -> Result<Option<usize>, ValueError> {
        Ok(self.index_of(engine::check_type::<T>(NAME, item)?))
    }

    fn context(&self) -> String {
        engine::describe::<T>(NAME)
    }
}

/// Iterator over `(index, &item)` pairs of a [`ValueObjectList`].
pub type Iter<'a, T> = std::iter::Enumerate<im::vector::Iter<'a, T>>;

impl<T: ValueObject> Collection for ValueObjectList<T> {
    type Key = usize;
    type Item = T;

    fn count(&self) -> usize {
        ValueObjectList::count(self)
    }

    fn has(&self, key: &usize) -> bool {
        ValueObjectList::has(self, *key)
    }

    fn get(&self, key: &usize) -> Result<&T, ValueError> {
        ValueObjectList::get(self, *key)
    }
}

impl<T: ValueObject> ValueObject for ValueObjectList<T> {
    const TYPE_NAME: &'static str = NAME;

    fn type_label() -> Cow<'static, str> {
        Cow::Owned(engine::describe::<T>(NAME))
    }

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match native {
            Native::Null => Ok(Self::make_empty()),
            Native::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(i, element)| engine::element_from_native(NAME, EXPECTED, i, element))
                .collect::<Result<Vector<T>, _>>()
                .map(|items| Self { items }),
            other => Err(ValidationError::unsupported(NAME, EXPECTED, other)),
        }
    }

    fn to_native(&self) -> Native {
        Native::Array(self.items.iter().map(ValueObject::to_native).collect())
    }

    fn equals(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().zip(other.items.iter()).all(|(a, b)| a.equals(b))
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ValueObject> MakeEmpty for ValueObjectList<T> {
    fn make_empty() -> Self {
        Self {
            items: Vector::new(),
        }
    }
}

impl<T: ValueObject> Default for ValueObjectList<T> {
    fn default() -> Self {
        Self::make_empty()
    }
}

impl<T: ValueObject> PartialEq for ValueObjectList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: ValueObject> fmt::Display for ValueObjectList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        engine::render(f, ":", self.iter())
    }
}

impl<T: ValueObject> FromIterator<T> for ValueObjectList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::wrap(iter)
    }
}

impl<'a, T: ValueObject> IntoIterator for &'a ValueObjectList<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: ValueObject> serde::Serialize for ValueObjectList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_native(), serializer)
    }
}

impl<'de, T: ValueObject> serde::Deserialize<'de> for ValueObjectList<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let native = <Native as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_native(&native).map_err(serde::de::Error::custom)
    }
}
