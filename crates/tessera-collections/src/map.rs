//! # Typed Map
//!
//! [`ValueObjectMap<T>`] maps non-empty string keys to values of type `T`.
//! Iteration, rendering and the native form follow first-insertion order;
//! overwriting a key keeps its position. Equality ignores order.
//!
//! Like the list, the map is persistent: [`ValueObjectMap::set`] returns a
//! new map backed by `im::HashMap` plus an `im::Vector` of keys, and the
//! receiver is never altered.

use std::borrow::Cow;
use std::fmt;

use im::{HashMap, Vector};
use tessera_core::{
    AnyValueObject, MakeEmpty, Native, NativeMap, ValidationError, ValueError, ValueObject,
};

use crate::engine::{self, Collection};

const NAME: &str = "ValueObjectMap";
const EXPECTED: &str = "mapping of non-empty keys to element natives, or null";

/// An immutable, insertion-ordered map of `T`.
#[derive(Debug, Clone)]
pub struct ValueObjectMap<T: ValueObject> {
    items: HashMap<String, T>,
    order: Vector<String>,
}

impl<T: ValueObject> ValueObjectMap<T> {
    /// Build a map from typed entries. Later duplicates overwrite earlier
    /// ones in place.
    ///
    /// # Errors
    ///
    /// [`ValueError::Validation`] if any key is empty.
    pub fn wrap<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, T)>,
    ) -> Result<Self, ValueError> {
        entries
            .into_iter()
            .try_fold(Self::make_empty(), |map, (key, item)| map.set(key, item))
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// The value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`ValueError::KeyNotFound`] if `key` is absent.
    pub fn get(&self, key: &str) -> Result<&T, ValueError> {
        self.items.get(key).ok_or_else(|| ValueError::KeyNotFound {
            context: engine::describe::<T>(NAME),
            key: key.to_string(),
        })
    }

    /// A new map with `key` bound to `item`.
    ///
    /// # Errors
    ///
    /// [`ValueError::Validation`] if `key` is empty.
    pub fn set(&self, key: impl Into<String>, item: T) -> Result<Self, ValueError> {
        let key = validate_key(key.into())?;
        let mut next = self.clone();
        if !next.items.contains_key(&key) {
            next.order.push_back(key.clone());
        }
        next.items.insert(key, item);
        Ok(next)
    }

    /// [`set`](Self::set) for an erased value.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidType`] if `item` is not a `T`;
    /// [`ValueError::Validation`] if `key` is empty.
    pub fn set_any(
        &self,
        key: impl Into<String>,
        item: &dyn AnyValueObject,
    ) -> Result<Self, ValueError> {
        let item = engine::check_type::<T>(NAME, item)?;
        self.set(key, item.clone())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, item)| item)
    }

    /// Iterate `(key, &item)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.order.iter(),
            items: &self.items,
        }
    }

    /// The entries as a plain vector, in insertion order.
    pub fn unwrap(&self) -> Vec<(String, T)> {
        self.iter()
            .map(|(key, item)| (key.to_string(), item.clone()))
            .collect()
    }
}

fn validate_key(key: String) -> Result<String, ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::new(NAME, EXPECTED, "keys must be non-empty"));
    }
    Ok(key)
}

/// Iterator over `(key, &item)` pairs of a [`ValueObjectMap`].
pub struct Iter<'a, T: ValueObject> {
    keys: im::vector::Iter<'a, String>,
    items: &'a HashMap<String, T>,
}

impl<'a, T: ValueObject> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.keys
            .find_map(|key| items.get(key).map(|item| (key.as_str(), item)))
    }
}

impl<T: ValueObject> Collection for ValueObjectMap<T> {
    type Key = str;
    type Item = T;

    fn count(&self) -> usize {
        ValueObjectMap::count(self)
    }

    fn has(&self, key: &str) -> bool {
        ValueObjectMap::has(self, key)
    }

    fn get(&self, key: &str) -> Result<&T, ValueError> {
        ValueObjectMap::get(self, key)
    }
}

impl<T: ValueObject> ValueObject for ValueObjectMap<T> {
    const TYPE_NAME: &'static str = NAME;

    fn type_label() -> Cow<'static, str> {
        Cow::Owned(engine::describe::<T>(NAME))
    }

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        let entries = match native {
            Native::Null => return Ok(Self::make_empty()),
            Native::Object(entries) => entries,
            other => return Err(ValidationError::unsupported(NAME, EXPECTED, other)),
        };
        let mut map = Self::make_empty();
        for (key, element) in entries {
            let key = validate_key(key.clone())?;
            let item = engine::element_from_native(NAME, EXPECTED, format!("{key:?}"), element)?;
            map.order.push_back(key.clone());
            map.items.insert(key, item);
        }
        Ok(map)
    }

    fn to_native(&self) -> Native {
        let entries: NativeMap = self
            .iter()
            .map(|(key, item)| (key.to_string(), item.to_native()))
            .collect();
        Native::Object(entries)
    }

    fn equals(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .all(|(key, item)| other.items.get(key).map_or(false, |o| item.equals(o)))
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ValueObject> MakeEmpty for ValueObjectMap<T> {
    fn make_empty() -> Self {
        Self {
            items: HashMap::new(),
            order: Vector::new(),
        }
    }
}

impl<T: ValueObject> Default for ValueObjectMap<T> {
    fn default() -> Self {
        Self::make_empty()
    }
}

impl<T: ValueObject> PartialEq for ValueObjectMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: ValueObject> fmt::Display for ValueObjectMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        engine::render(f, ": ", self.iter())
    }
}

impl<'a, T: ValueObject> IntoIterator for &'a ValueObjectMap<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: ValueObject> serde::Serialize for ValueObjectMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_native(), serializer)
    }
}

impl<'de, T: ValueObject> serde::Deserialize<'de> for ValueObjectMap<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let native = <Native as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_native(&native).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_core::{Date, IntValue, Text};

    type DateMap = ValueObjectMap<Date>;

    fn int_map(entries: &[(&str, i64)]) -> ValueObjectMap<IntValue> {
        ValueObjectMap::wrap(entries.iter().map(|(k, v)| (*k, IntValue::new(*v)))).unwrap()
    }

    #[test]
    fn from_native_roundtrip_keeps_order() {
        let native = json!({"b": "2030-01-01", "a": "2020-01-01"});
        let map = DateMap::from_native(&native).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(
            serde_json::to_string(&map.to_native()).unwrap(),
            r#"{"b":"2030-01-01","a":"2020-01-01"}"#
        );
        assert_eq!(map.to_string(), "b: 2030-01-01, a: 2020-01-01");
    }

    #[test]
    fn get_and_has() {
        let map = int_map(&[("x", 1)]);
        assert!(map.has("x"));
        assert!(!map.has("y"));
        assert_eq!(map.get("x").unwrap(), &IntValue::new(1));
        assert_eq!(
            map.get("y"),
            Err(ValueError::KeyNotFound {
                context: "ValueObjectMap<IntValue>".to_string(),
                key: "y".to_string(),
            })
        );
    }

    #[test]
    fn set_is_persistent_and_keeps_position() {
        let map = int_map(&[("a", 1), ("b", 2)]);
        let updated = map.set("a", IntValue::new(10)).unwrap();
        let extended = map.set("c", IntValue::new(3)).unwrap();
        assert_eq!(map.get("a").unwrap(), &IntValue::new(1));
        assert_eq!(map.count(), 2);
        assert_eq!(updated.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(updated.get("a").unwrap(), &IntValue::new(10));
        assert_eq!(extended.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_key_is_rejected() {
        let map = int_map(&[]);
        assert!(matches!(map.set("", IntValue::new(1)), Err(ValueError::Validation(_))));
        assert!(ValueObjectMap::<IntValue>::from_native(&json!({"": 1})).is_err());
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(int_map(&[("a", 1), ("b", 2)]), int_map(&[("b", 2), ("a", 1)]));
        assert_ne!(int_map(&[("a", 1)]), int_map(&[("a", 2)]));
        assert_ne!(int_map(&[("a", 1)]), int_map(&[("b", 1)]));
        assert_ne!(int_map(&[("a", 1)]), int_map(&[("a", 1), ("b", 1)]));
    }

    #[test]
    fn nested_type_label_expands_elements() {
        type Nested = ValueObjectMap<ValueObjectMap<Date>>;
        assert_eq!(Nested::type_label(), "ValueObjectMap<ValueObjectMap<Date>>");
        let err = Nested::make_empty()
            .equals_any(&DateMap::make_empty())
            .unwrap_err();
        assert!(matches!(
            err,
            ValueError::InvalidType { ref expected, ref actual, .. }
                if expected == "ValueObjectMap<ValueObjectMap<Date>>"
                    && actual == "ValueObjectMap<Date>"
        ));
    }

    #[test]
    fn set_any_checks_type() {
        let map = DateMap::make_empty();
        let err = map.set_any("k", &Text::new("2020-01-01")).unwrap_err();
        assert!(matches!(err, ValueError::InvalidType { ref expected, .. } if expected == "Date"));
        let d = Date::from_native(&json!("2020-01-01")).unwrap();
        assert_eq!(map.set_any("k", &d).unwrap().get("k").unwrap(), &d);
    }

    #[test]
    fn from_native_null_and_bad_shapes() {
        assert!(DateMap::from_native(&json!(null)).unwrap().is_empty());
        assert_eq!(DateMap::make_empty().to_native(), json!({}));
        assert!(DateMap::from_native(&json!(["2020-01-01"])).is_err());
        let err = DateMap::from_native(&json!({"a": "bad"})).unwrap_err();
        assert!(err.reason.starts_with("element \"a\":"), "{}", err.reason);
    }

    #[test]
    fn values_and_unwrap() {
        let map = int_map(&[("a", 1), ("b", 2)]);
        let values: Vec<_> = map.values().map(|v| v.value()).collect();
        assert_eq!(values, vec![Some(1), Some(2)]);
        assert_eq!(
            map.unwrap(),
            vec![("a".to_string(), IntValue::new(1)), ("b".to_string(), IntValue::new(2))]
        );
    }

    #[test]
    fn wrap_overwrites_duplicates_in_place() {
        let map = int_map(&[("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(map.count(), 2);
        assert_eq!(map.to_native(), json!({"a": 3, "b": 2}));
    }
}
