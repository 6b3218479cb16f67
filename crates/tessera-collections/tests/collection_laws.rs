//! # Collection Laws
//!
//! Scenario and property tests for typed lists and maps: declared-type
//! binding, persistence, idempotent removal, nesting, and runtime type
//! enforcement on the erased API.

use proptest::prelude::*;
use serde_json::json;
use tessera_collections::{Collection, ValueObjectList, ValueObjectMap};
use tessera_core::{Date, IntValue, MakeEmpty, Text, ValueError, ValueObject};

type DateList = ValueObjectList<Date>;
type DateMap = ValueObjectMap<Date>;
type TextMapList = ValueObjectList<ValueObjectMap<Text>>;

fn date(s: &str) -> Date {
    Date::from_native(&json!(s)).unwrap()
}

#[test]
fn date_list_renders_index_value_pairs() {
    let list = DateList::from_native(&json!(["2020-01-01", "2030-01-01"])).unwrap();
    assert_eq!(list.count(), 2);
    assert_eq!(list.to_string(), "0:2020-01-01, 1:2030-01-01");
}

#[test]
fn independently_built_maps_are_equal_and_isolated() {
    let a = DateMap::from_native(&json!({"a": "2020-01-01"})).unwrap();
    let b = DateMap::from_native(&json!({"a": "2020-01-01"})).unwrap();
    assert!(a.equals(&b));

    let a2 = a.set("b", date("2021-06-01")).unwrap();
    assert!(!a2.equals(&b));
    assert_eq!(b.count(), 1);
    assert!(!b.has("b"));
    assert!(a.equals(&b));
}

#[test]
fn collections_nest() {
    let native = json!([{"greeting": "hello"}, {}, {"a": "x", "b": "y"}]);
    let nested = TextMapList::from_native(&native).unwrap();
    assert_eq!(nested.count(), 3);
    assert!(nested.get(1).unwrap().is_empty());
    assert_eq!(nested.get(2).unwrap().get("b").unwrap().as_str(), "y");
    assert_eq!(nested.to_native(), native);
    assert_eq!(nested.to_string(), "0:greeting: hello, 1:, 2:a: x, b: y");
}

#[test]
fn nested_failure_names_both_positions() {
    let err = TextMapList::from_native(&json!([{"ok": "x"}, {"bad": 5}])).unwrap_err();
    assert!(err.reason.starts_with("element 1:"), "{}", err.reason);
    assert!(err.reason.contains("element \"bad\""), "{}", err.reason);
}

#[test]
fn erased_api_rejects_foreign_types() {
    let list = DateList::make_empty();
    let map = DateMap::make_empty();
    let int = IntValue::new(1);
    assert!(matches!(list.push_any(&int), Err(ValueError::InvalidType { .. })));
    assert!(matches!(map.set_any("k", &int), Err(ValueError::InvalidType { .. })));
}

fn total_count<C: Collection>(collections: &[C]) -> usize {
    collections.iter().map(Collection::count).sum()
}

#[test]
fn collection_trait_is_shared() {
    let lists = [DateList::wrap([date("2020-01-01")]), DateList::make_empty()];
    assert_eq!(total_count(&lists), 1);
    let map = DateMap::wrap([("k", date("2020-01-01"))]).unwrap();
    assert!(Collection::has(&map, "k"));
    assert!(matches!(Collection::get(&map, "z"), Err(ValueError::KeyNotFound { .. })));
    assert!(matches!(Collection::get(&lists[1], &0), Err(ValueError::OutOfRange { .. })));
}

fn int_list() -> impl Strategy<Value = ValueObjectList<IntValue>> {
    prop::collection::vec(-50i64..50, 0..24)
        .prop_map(|values| values.into_iter().map(IntValue::new).collect())
}

proptest! {
    /// `push` returns a longer list and leaves the receiver unchanged.
    #[test]
    fn push_is_persistent(list in int_list(), x in any::<i64>()) {
        let before = list.to_native();
        let pushed = list.push(IntValue::new(x));
        prop_assert_eq!(pushed.count(), list.count() + 1);
        prop_assert_eq!(list.to_native(), before);
        prop_assert_eq!(pushed.last(), Some(&IntValue::new(x)));
    }

    /// Removing an absent item yields an equal list.
    #[test]
    fn removing_absent_item_is_identity(list in int_list()) {
        let absent = IntValue::new(1_000);
        prop_assert!(list.remove(&absent).equals(&list));
    }

    /// `remove` drops exactly one occurrence when present.
    #[test]
    fn remove_drops_one(list in int_list(), x in -50i64..50) {
        let item = IntValue::new(x);
        let removed = list.remove(&item);
        let expected = if list.index_of(&item).is_some() { list.count() - 1 } else { list.count() };
        prop_assert_eq!(removed.count(), expected);
    }

    #[test]
    fn reverse_is_involutive(list in int_list()) {
        prop_assert!(list.reverse().reverse().equals(&list));
    }

    #[test]
    fn list_roundtrips(list in int_list()) {
        let back = ValueObjectList::<IntValue>::from_native(&list.to_native()).unwrap();
        prop_assert!(back.equals(&list));
    }

    /// `set` never alters the receiver, and the result holds the new binding.
    #[test]
    fn set_is_persistent(
        entries in prop::collection::btree_map("[a-z]{1,4}", -50i64..50, 0..12),
        key in "[a-z]{1,4}",
        x in any::<i64>(),
    ) {
        let map = ValueObjectMap::wrap(entries.iter().map(|(k, v)| (k.clone(), IntValue::new(*v)))).unwrap();
        let before = map.to_native();
        let next = map.set(key.clone(), IntValue::new(x)).unwrap();
        prop_assert_eq!(map.to_native(), before);
        prop_assert_eq!(next.get(&key).unwrap(), &IntValue::new(x));
        let grew = usize::from(!map.has(&key));
        prop_assert_eq!(next.count(), map.count() + grew);
    }

    #[test]
    fn map_equality_is_order_insensitive(
        entries in prop::collection::btree_map("[a-z]{1,4}", -50i64..50, 0..12),
    ) {
        let forward = ValueObjectMap::wrap(entries.iter().map(|(k, v)| (k.clone(), IntValue::new(*v)))).unwrap();
        let backward = ValueObjectMap::wrap(entries.iter().rev().map(|(k, v)| (k.clone(), IntValue::new(*v)))).unwrap();
        prop_assert!(forward.equals(&backward));
        prop_assert!(backward.equals(&forward));
    }
}
