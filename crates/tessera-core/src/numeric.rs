//! # Numeric Values
//!
//! [`IntValue`], [`Natural`], and [`FloatValue`]. All three model absence as
//! a first-class empty state (`None`), built from a null or `""` native.
//! Arithmetic and comparisons on an empty value fail with
//! [`ValueError::EmptyState`] instead of treating it as zero.
//!
//! | Type | Empty native | Empty display |
//! |------|--------------|---------------|
//! | `IntValue` | null | `null` |
//! | `Natural` | null | *(empty string)* |
//! | `FloatValue` | null | `null` |

use std::cmp::Ordering;

use crate::error::{ValidationError, ValueError};
use crate::native::{float_native, floatish, integerish, Native};
use crate::value::{native_serde, require_value, MakeEmpty, ValueObject};

// ---------------------------------------------------------------------------
// IntValue
// ---------------------------------------------------------------------------

/// A signed 64-bit integer, or empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntValue(Option<i64>);

impl IntValue {
    /// Create a non-empty integer value.
    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// The integer, or `None` when empty.
    pub fn value(&self) -> Option<i64> {
        self.0
    }

    /// Whether the value is zero.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if the value is empty.
    pub fn is_zero(&self) -> Result<bool, ValueError> {
        Ok(self.present("is_zero")? == 0)
    }

    /// Sum of two integers.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if either operand is empty;
    /// [`ValueError::Validation`] on overflow.
    pub fn add(&self, other: &Self) -> Result<Self, ValueError> {
        let (a, b) = (self.present("add")?, other.present("add")?);
        a.checked_add(b)
            .map(Self::new)
            .ok_or_else(|| overflow(Self::TYPE_NAME, "add").into())
    }

    /// Difference of two integers.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if either operand is empty;
    /// [`ValueError::Validation`] on overflow.
    pub fn subtract(&self, other: &Self) -> Result<Self, ValueError> {
        let (a, b) = (self.present("subtract")?, other.present("subtract")?);
        a.checked_sub(b)
            .map(Self::new)
            .ok_or_else(|| overflow(Self::TYPE_NAME, "subtract").into())
    }

    fn present(&self, operation: &'static str) -> Result<i64, ValueError> {
        self.0
            .ok_or_else(|| ValueError::empty_state(Self::TYPE_NAME, operation))
    }
}

impl ValueObject for IntValue {
    const TYPE_NAME: &'static str = "IntValue";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        Ok(Self(integerish(native, Self::TYPE_NAME, "integer, integer string, or null")?))
    }

    fn to_native(&self) -> Native {
        self.0.map_or(Native::Null, Native::from)
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl MakeEmpty for IntValue {
    fn make_empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Display for IntValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("null"),
        }
    }
}

native_serde!(IntValue);

// ---------------------------------------------------------------------------
// Natural
// ---------------------------------------------------------------------------

/// A non-negative integer, or empty.
///
/// The non-negativity invariant is checked at every construction, including
/// the results of [`Natural::add`] and [`Natural::subtract`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural(Option<i64>);

impl Natural {
    const EXPECTED: &'static str = "integer >= 0, integer string, or null";

    /// Create a natural number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `value` is negative.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::new(
                Self::TYPE_NAME,
                Self::EXPECTED,
                format!("must be at least 0, got {value}"),
            ));
        }
        Ok(Self(Some(value)))
    }

    /// The natural number zero.
    pub fn zero() -> Self {
        Self(Some(0))
    }

    /// The number, or `None` when empty.
    pub fn value(&self) -> Option<i64> {
        self.0
    }

    /// Whether the value is zero.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if the value is empty.
    pub fn is_zero(&self) -> Result<bool, ValueError> {
        Ok(self.present("is_zero")? == 0)
    }

    /// Sum of two naturals.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if either operand is empty;
    /// [`ValueError::Validation`] on overflow.
    pub fn add(&self, amount: &Self) -> Result<Self, ValueError> {
        let (a, b) = (self.present("add")?, amount.present("add")?);
        let sum = a
            .checked_add(b)
            .ok_or_else(|| overflow(Self::TYPE_NAME, "add"))?;
        Ok(Self::new(sum)?)
    }

    /// Difference of two naturals.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if either operand is empty;
    /// [`ValueError::Validation`] if the result would be negative.
    pub fn subtract(&self, amount: &Self) -> Result<Self, ValueError> {
        let (a, b) = (self.present("subtract")?, amount.present("subtract")?);
        Ok(Self::new(a - b)?)
    }

    /// Compare two naturals.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if either side is empty.
    pub fn compare(&self, other: &Self) -> Result<Ordering, ValueError> {
        Ok(self.present("compare")?.cmp(&other.present("compare")?))
    }

    /// `self > other`.
    pub fn is_greater_than(&self, other: &Self) -> Result<bool, ValueError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self >= other`.
    pub fn is_greater_than_or_equal_to(&self, other: &Self) -> Result<bool, ValueError> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// `self < other`.
    pub fn is_less_than(&self, other: &Self) -> Result<bool, ValueError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`.
    pub fn is_less_than_or_equal_to(&self, other: &Self) -> Result<bool, ValueError> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    fn present(&self, operation: &'static str) -> Result<i64, ValueError> {
        require_value(self, operation)?;
        Ok(self.0.unwrap_or_default())
    }
}

impl ValueObject for Natural {
    const TYPE_NAME: &'static str = "Natural";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match integerish(native, Self::TYPE_NAME, Self::EXPECTED)? {
            Some(value) => Self::new(value),
            None => Ok(Self(None)),
        }
    }

    fn to_native(&self) -> Native {
        self.0.map_or(Native::Null, Native::from)
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl MakeEmpty for Natural {
    fn make_empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Display for Natural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => Ok(()),
        }
    }
}

native_serde!(Natural);

// ---------------------------------------------------------------------------
// FloatValue
// ---------------------------------------------------------------------------

/// A finite 64-bit float, or empty.
///
/// Integer natives are accepted and canonicalize to float natives, so
/// `from_native(2)` renders back as `2.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatValue(Option<f64>);

impl FloatValue {
    const EXPECTED: &'static str = "finite number, numeric string, or null";

    /// Create a float value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for NaN or infinite input.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::new(
                Self::TYPE_NAME,
                Self::EXPECTED,
                format!("{value} is not finite"),
            ));
        }
        Ok(Self(Some(value)))
    }

    /// The float, or `None` when empty.
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    /// Render with a fixed number of decimal places.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if the value is empty.
    pub fn format(&self, precision: usize) -> Result<String, ValueError> {
        let value = self
            .0
            .ok_or_else(|| ValueError::empty_state(Self::TYPE_NAME, "format"))?;
        Ok(format!("{value:.precision$}"))
    }
}

impl ValueObject for FloatValue {
    const TYPE_NAME: &'static str = "FloatValue";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        Ok(Self(floatish(native, Self::TYPE_NAME, Self::EXPECTED)?))
    }

    fn to_native(&self) -> Native {
        self.0.map_or(Native::Null, float_native)
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl MakeEmpty for FloatValue {
    fn make_empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Display for FloatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("null"),
        }
    }
}

native_serde!(FloatValue);

fn overflow(type_name: &'static str, operation: &str) -> ValidationError {
    ValidationError::new(
        type_name,
        "result within 64-bit range",
        format!("{operation} overflowed"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- IntValue --

    #[test]
    fn int_from_native_variants() {
        assert_eq!(IntValue::from_native(&json!(23)).unwrap().value(), Some(23));
        assert_eq!(IntValue::from_native(&json!("23")).unwrap().value(), Some(23));
        assert!(IntValue::from_native(&json!("")).unwrap().is_empty());
        assert!(IntValue::from_native(&json!(null)).unwrap().is_empty());
        assert!(IntValue::from_native(&json!("2.3")).is_err());
        assert!(IntValue::from_native(&json!(false)).is_err());
    }

    #[test]
    fn int_empty_renders_null() {
        let empty = IntValue::make_empty();
        assert_eq!(empty.to_native(), json!(null));
        assert_eq!(empty.to_string(), "null");
    }

    #[test]
    fn int_arithmetic() {
        let a = IntValue::new(5);
        let b = IntValue::new(-8);
        assert_eq!(a.add(&b).unwrap(), IntValue::new(-3));
        assert_eq!(a.subtract(&b).unwrap(), IntValue::new(13));
        assert!(IntValue::new(0).is_zero().unwrap());
    }

    #[test]
    fn int_arithmetic_on_empty_fails() {
        let empty = IntValue::make_empty();
        assert_eq!(
            empty.add(&IntValue::new(1)),
            Err(ValueError::empty_state("IntValue", "add"))
        );
        assert!(IntValue::new(1).add(&empty).is_err());
        assert!(empty.is_zero().is_err());
    }

    #[test]
    fn int_overflow_is_validation_error() {
        let err = IntValue::new(i64::MAX).add(&IntValue::new(1)).unwrap_err();
        assert!(matches!(err, ValueError::Validation(_)));
    }

    #[test]
    fn native_beyond_i64_is_rejected_not_clamped() {
        let too_big = json!(9_223_372_036_854_775_808u64);
        let err = IntValue::from_native(&too_big).unwrap_err();
        assert_eq!(err.type_name, "IntValue");
        assert!(Natural::from_native(&too_big).is_err());
        assert_eq!(
            IntValue::from_native(&json!(i64::MAX)).unwrap().to_native(),
            json!(i64::MAX)
        );
    }

    // -- Natural --

    #[test]
    fn natural_subtract() {
        let five = Natural::from_native(&json!(5)).unwrap();
        let three = Natural::from_native(&json!(3)).unwrap();
        assert_eq!(five.subtract(&three).unwrap().to_native(), json!(2));
    }

    #[test]
    fn natural_subtract_below_zero_fails() {
        let one = Natural::from_native(&json!(1)).unwrap();
        let err = Natural::zero().subtract(&one).unwrap_err();
        assert!(matches!(err, ValueError::Validation(_)));
    }

    #[test]
    fn natural_rejects_negative_native() {
        assert!(Natural::from_native(&json!(-1)).is_err());
        assert!(Natural::from_native(&json!("-4")).is_err());
        assert!(Natural::new(-1).is_err());
    }

    #[test]
    fn natural_comparisons() {
        let two = Natural::new(2).unwrap();
        let three = Natural::new(3).unwrap();
        assert!(three.is_greater_than(&two).unwrap());
        assert!(three.is_greater_than_or_equal_to(&three).unwrap());
        assert!(two.is_less_than(&three).unwrap());
        assert!(two.is_less_than_or_equal_to(&two).unwrap());
        assert!(two.compare(&Natural::make_empty()).is_err());
    }

    #[test]
    fn natural_empty_state() {
        let empty = Natural::from_native(&json!("")).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
        assert_eq!(empty.to_native(), json!(null));
        assert!(empty.add(&Natural::zero()).is_err());
        assert!(empty.is_zero().is_err());
    }

    // -- FloatValue --

    #[test]
    fn float_roundtrip() {
        let v = FloatValue::from_native(&json!(2.5)).unwrap();
        assert_eq!(v.to_native(), json!(2.5));
        assert_eq!(v.to_string(), "2.5");
    }

    #[test]
    fn float_canonicalizes_integers() {
        let v = FloatValue::from_native(&json!(2)).unwrap();
        assert_eq!(v.value(), Some(2.0));
        assert_eq!(v.to_native(), json!(2.0));
    }

    #[test]
    fn float_empty() {
        let v = FloatValue::from_native(&json!(null)).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.to_string(), "null");
        assert_eq!(
            v.format(2),
            Err(ValueError::empty_state("FloatValue", "format"))
        );
    }

    #[test]
    fn float_format() {
        assert_eq!(FloatValue::new(1.0 / 3.0).unwrap().format(3).unwrap(), "0.333");
    }

    #[test]
    fn float_rejects_non_finite() {
        assert!(FloatValue::new(f64::NAN).is_err());
        assert!(FloatValue::new(f64::INFINITY).is_err());
    }
}
