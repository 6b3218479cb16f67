//! # tessera-collections: Typed Persistent Collections
//!
//! Two homogeneous, immutable collections of value objects:
//!
//! - [`ValueObjectList<T>`]: ordered and zero-indexed.
//! - [`ValueObjectMap<T>`]: string-keyed, iterated in first-insertion order.
//!
//! The element type is the generic parameter, so a concrete collection type is
//! declared with an alias:
//!
//! ```
//! use tessera_collections::ValueObjectList;
//! use tessera_core::{Date, ValueObject};
//!
//! type DateList = ValueObjectList<Date>;
//!
//! let dates = DateList::from_native(&serde_json::json!(["2020-01-01"])).unwrap();
//! let more = dates.push(Date::from_native(&serde_json::json!("2030-01-01")).unwrap());
//! assert_eq!(dates.count(), 1);
//! assert_eq!(more.to_string(), "0:2020-01-01, 1:2030-01-01");
//! ```
//!
//! Both collections implement [`ValueObject`](tessera_core::ValueObject)
//! themselves, so they nest and round-trip through natives like any scalar.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod list;
pub mod map;

pub use engine::{describe, Collection};
pub use list::ValueObjectList;
pub use map::ValueObjectMap;
