//! # Type Expressions
//!
//! Maps the names accepted on the command line to concrete value types.
//! A type expression is a scalar name (`date`), or a scalar name wrapped in
//! a collection shape (`list<date>`, `map<float>`).
//!
//! Rust has no runtime reflection, so the name-to-type mapping is a closed
//! enum, and generic work over "whatever type the name denotes" goes through
//! [`ScalarVisitor`].

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use tessera_collections::{ValueObjectList, ValueObjectMap};
use tessera_core::{
    Address, AnyValueObject, BoolValue, Date, Email, FloatValue, GeoPoint, IntValue, Native,
    Natural, NullValue, Range, Sha256, Text, Timestamp, Url, Uuid, ValidationError, ValueObject,
};

/// The scalar value types addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// [`Text`]
    Text,
    /// [`IntValue`]
    Int,
    /// [`FloatValue`]
    Float,
    /// [`Natural`]
    Natural,
    /// [`BoolValue`]
    Bool,
    /// [`NullValue`]
    Null,
    /// [`Date`]
    Date,
    /// [`Timestamp`]
    Timestamp,
    /// [`Uuid`]
    Uuid,
    /// [`Sha256`]
    Sha256,
    /// [`Email`]
    Email,
    /// [`Url`]
    Url,
    /// [`Address`]
    Address,
    /// [`GeoPoint`]
    GeoPoint,
    /// [`Range`]
    Range,
}

impl Scalar {
    /// Every scalar, in listing order.
    pub const ALL: [Scalar; 15] = [
        Self::Text,
        Self::Int,
        Self::Float,
        Self::Natural,
        Self::Bool,
        Self::Null,
        Self::Date,
        Self::Timestamp,
        Self::Uuid,
        Self::Sha256,
        Self::Email,
        Self::Url,
        Self::Address,
        Self::GeoPoint,
        Self::Range,
    ];

    /// The command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int => "int",
            Self::Float => "float",
            Self::Natural => "natural",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Sha256 => "sha256",
            Self::Email => "email",
            Self::Url => "url",
            Self::Address => "address",
            Self::GeoPoint => "geo_point",
            Self::Range => "range",
        }
    }

    /// Look up a scalar by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Run `visitor` with the concrete type this scalar denotes.
    pub fn accept<V: ScalarVisitor>(self, visitor: V) -> V::Output {
        match self {
            Self::Text => visitor.visit::<Text>(),
            Self::Int => visitor.visit::<IntValue>(),
            Self::Float => visitor.visit::<FloatValue>(),
            Self::Natural => visitor.visit::<Natural>(),
            Self::Bool => visitor.visit::<BoolValue>(),
            Self::Null => visitor.visit::<NullValue>(),
            Self::Date => visitor.visit::<Date>(),
            Self::Timestamp => visitor.visit::<Timestamp>(),
            Self::Uuid => visitor.visit::<Uuid>(),
            Self::Sha256 => visitor.visit::<Sha256>(),
            Self::Email => visitor.visit::<Email>(),
            Self::Url => visitor.visit::<Url>(),
            Self::Address => visitor.visit::<Address>(),
            Self::GeoPoint => visitor.visit::<GeoPoint>(),
            Self::Range => visitor.visit::<Range>(),
        }
    }
}

/// Generic operation over the concrete type behind a [`Scalar`].
pub trait ScalarVisitor {
    /// Result of the visit.
    type Output;

    /// Called with `T` bound to the scalar's type.
    fn visit<T: ValueObject>(self) -> Self::Output;
}

/// How the scalar is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// The bare scalar.
    Scalar,
    /// `ValueObjectList<scalar>`.
    List,
    /// `ValueObjectMap<scalar>`.
    Map,
}

/// A parsed type expression such as `list<date>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeExpr {
    /// Collection shape.
    pub shape: Shape,
    /// Element or scalar type.
    pub scalar: Scalar,
}

impl TypeExpr {
    /// Parse a type expression.
    ///
    /// # Errors
    ///
    /// Fails on unknown shapes or scalar names.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (shape, inner) = match input.split_once('<') {
            None => (Shape::Scalar, input),
            Some((outer, rest)) => {
                let Some(inner) = rest.strip_suffix('>') else {
                    bail!("unterminated type expression {input:?}");
                };
                let shape = match outer.trim() {
                    "list" => Shape::List,
                    "map" => Shape::Map,
                    other => bail!("unknown collection shape {other:?} (expected list or map)"),
                };
                (shape, inner.trim())
            }
        };
        let Some(scalar) = Scalar::from_name(inner) else {
            bail!("unknown type {inner:?}; run `tessera types` for the list of known types");
        };
        Ok(Self { shape, scalar })
    }

    /// The concrete type name, e.g. `ValueObjectList<Date>`.
    pub fn type_name(&self) -> String {
        self.scalar.accept(TypeName(self.shape))
    }

    /// Build a value of this type from a native.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] raised by the type's constructor.
    pub fn build(&self, native: &Native) -> Result<Box<dyn AnyValueObject>, ValidationError> {
        self.scalar.accept(Build {
            shape: self.shape,
            native,
        })
    }
}

impl FromStr for TypeExpr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Scalar => f.write_str(self.scalar.name()),
            Shape::List => write!(f, "list<{}>", self.scalar.name()),
            Shape::Map => write!(f, "map<{}>", self.scalar.name()),
        }
    }
}

struct TypeName(Shape);

impl ScalarVisitor for TypeName {
    type Output = String;

    fn visit<T: ValueObject>(self) -> String {
        match self.0 {
            Shape::Scalar => T::type_label().into_owned(),
            Shape::List => ValueObjectList::<T>::type_label().into_owned(),
            Shape::Map => ValueObjectMap::<T>::type_label().into_owned(),
        }
    }
}

struct Build<'a> {
    shape: Shape,
    native: &'a Native,
}

impl ScalarVisitor for Build<'_> {
    type Output = Result<Box<dyn AnyValueObject>, ValidationError>;

    fn visit<T: ValueObject>(self) -> Self::Output {
        match self.shape {
            Shape::Scalar => boxed::<T>(self.native),
            Shape::List => boxed::<ValueObjectList<T>>(self.native),
            Shape::Map => boxed::<ValueObjectMap<T>>(self.native),
        }
    }
}

fn boxed<T: ValueObject>(native: &Native) -> Result<Box<dyn AnyValueObject>, ValidationError> {
    Ok(Box::new(T::from_native(native)?))
}
