//! # tessera-core: Immutable Value Objects
//!
//! This crate defines the value-object contract and every scalar value type
//! built on it. A value object wraps one immutable piece of data, validates it
//! once at construction, converts losslessly to and from a plain [`Native`]
//! representation, and is compared by content.
//!
//! ## Key Design Principles
//!
//! 1. **Construction is the only validation point.** `from_native` and the
//!    typed constructors return `Result<Self, ValidationError>`. There are no
//!    setters; every "changing" operation returns a new value.
//!
//! 2. **Natives are the interchange form.** Equality is defined as equality of
//!    natives, and serde is routed through the same conversion.
//!
//! 3. **Empty is a state, not a null.** Types that model absence implement
//!    [`MakeEmpty`] and answer [`ValueObject::is_empty`]; operations that need
//!    a payload fail with [`ValueError::EmptyState`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tessera-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod native;
pub mod value;

mod address;
mod boolean;
mod digest;
mod email;
mod geo;
mod identity;
mod numeric;
mod range;
mod temporal;
mod text;
mod web;

pub use error::{ValidationError, ValueError};
pub use native::{kind_of, Native, NativeMap};
pub use value::{downcast_value, AnyValueObject, MakeEmpty, ValueObject};

pub use address::{Address, AddressField};
pub use boolean::{BoolValue, NullValue};
pub use digest::Sha256;
pub use email::Email;
pub use geo::GeoPoint;
pub use identity::Uuid;
pub use numeric::{FloatValue, IntValue, Natural};
pub use range::Range;
pub use temporal::{Date, Timestamp};
pub use text::Text;
pub use web::Url;
