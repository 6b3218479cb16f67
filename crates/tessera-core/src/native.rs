//! # Native Representation
//!
//! [`Native`] is the sole interchange form of every value object: null, bool,
//! integer, float, string, ordered sequence, or string-keyed mapping. It is a
//! re-export of `serde_json::Value` built with `preserve_order`, so mappings
//! iterate in insertion order while comparing equal regardless of order.
//!
//! The helpers in this module implement the primitive coercions that several
//! scalar types share (nullable strings, integer-ish input, float input).

use crate::error::ValidationError;

/// The plain, reference-free interchange form of a value object.
pub type Native = serde_json::Value;

/// A string-keyed native mapping, iterated in insertion order.
pub type NativeMap = serde_json::Map<String, Native>;

/// Name the primitive kind of a native value, for diagnostics.
pub fn kind_of(native: &Native) -> &'static str {
    match native {
        Native::Null => "null",
        Native::Bool(_) => "boolean",
        Native::Number(n) if n.is_f64() => "float",
        Native::Number(_) => "integer",
        Native::String(_) => "string",
        Native::Array(_) => "sequence",
        Native::Object(_) => "mapping",
    }
}

/// Accept a string or null.
pub(crate) fn optional_str<'a>(
    native: &'a Native,
    type_name: &'static str,
    expected: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    match native {
        Native::Null => Ok(None),
        Native::String(s) => Ok(Some(s.as_str())),
        other => Err(ValidationError::unsupported(type_name, expected, other)),
    }
}

/// Accept a string or null, folding the empty string into `None`.
pub(crate) fn optional_nonempty_str<'a>(
    native: &'a Native,
    type_name: &'static str,
    expected: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    Ok(optional_str(native, type_name, expected)?.filter(|s| !s.is_empty()))
}

/// Accept an integer, an integer-ish string, a float without fractional part,
/// or null / `""` (yielding `None`).
pub(crate) fn integerish(
    native: &Native,
    type_name: &'static str,
    expected: &'static str,
) -> Result<Option<i64>, ValidationError> {
    match native {
        Native::Null => Ok(None),
        Native::String(s) if s.is_empty() => Ok(None),
        Native::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationError::new(type_name, expected, format!("{s:?} is not an integer"))),
        Native::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            if n.is_u64() {
                return Err(ValidationError::new(
                    type_name,
                    expected,
                    format!("{n} exceeds the 64-bit signed range"),
                ));
            }
            // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(Some(f as i64))
                }
                _ => Err(ValidationError::new(
                    type_name,
                    expected,
                    format!("{n} is not a representable integer"),
                )),
            }
        }
        other => Err(ValidationError::unsupported(type_name, expected, other)),
    }
}

/// Accept a finite number, a numeric string, or null / `""` (yielding `None`).
pub(crate) fn floatish(
    native: &Native,
    type_name: &'static str,
    expected: &'static str,
) -> Result<Option<f64>, ValidationError> {
    let value = match native {
        Native::Null => return Ok(None),
        Native::String(s) if s.is_empty() => return Ok(None),
        Native::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::new(type_name, expected, format!("{s:?} is not a number")))?,
        Native::Number(n) => n.as_f64().ok_or_else(|| {
            ValidationError::new(type_name, expected, format!("{n} is not representable as f64"))
        })?,
        other => return Err(ValidationError::unsupported(type_name, expected, other)),
    };
    if !value.is_finite() {
        return Err(ValidationError::new(
            type_name,
            expected,
            format!("{value} is not finite"),
        ));
    }
    Ok(Some(value))
}

/// Build a float native. Non-finite input has already been rejected at
/// construction, so the fallback to null is unreachable in practice.
pub(crate) fn float_native(value: f64) -> Native {
    serde_json::Number::from_f64(value)
        .map(Native::Number)
        .unwrap_or(Native::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_of_names_every_variant() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(true)), "boolean");
        assert_eq!(kind_of(&json!(1)), "integer");
        assert_eq!(kind_of(&json!(1.5)), "float");
        assert_eq!(kind_of(&json!("x")), "string");
        assert_eq!(kind_of(&json!([1])), "sequence");
        assert_eq!(kind_of(&json!({"a": 1})), "mapping");
    }

    #[test]
    fn integerish_accepts_strings_and_whole_floats() {
        assert_eq!(integerish(&json!("42"), "T", "int").unwrap(), Some(42));
        assert_eq!(integerish(&json!(" -7 "), "T", "int").unwrap(), Some(-7));
        assert_eq!(integerish(&json!(3.0), "T", "int").unwrap(), Some(3));
        assert_eq!(integerish(&json!(""), "T", "int").unwrap(), None);
        assert_eq!(integerish(&json!(null), "T", "int").unwrap(), None);
    }

    #[test]
    fn integerish_rejects_fractions_and_words() {
        assert!(integerish(&json!(3.5), "T", "int").is_err());
        assert!(integerish(&json!("abc"), "T", "int").is_err());
        assert!(integerish(&json!(true), "T", "int").is_err());
        assert!(integerish(&json!(u64::MAX), "T", "int").is_err());
    }

    #[test]
    fn integerish_rejects_values_just_past_i64() {
        assert!(integerish(&json!(9_223_372_036_854_775_808u64), "T", "int").is_err());
        assert!(integerish(&json!(9.223_372_036_854_775_808e18), "T", "int").is_err());
        assert!(integerish(&json!(-9.3e18), "T", "int").is_err());
        assert_eq!(integerish(&json!(i64::MAX), "T", "int").unwrap(), Some(i64::MAX));
        assert_eq!(integerish(&json!(i64::MIN), "T", "int").unwrap(), Some(i64::MIN));
        assert_eq!(integerish(&json!(-9.223_372_036_854_775_808e18), "T", "int").unwrap(), Some(i64::MIN));
    }

    #[test]
    fn floatish_accepts_numbers_and_numeric_strings() {
        assert_eq!(floatish(&json!(1.25), "T", "float").unwrap(), Some(1.25));
        assert_eq!(floatish(&json!(2), "T", "float").unwrap(), Some(2.0));
        assert_eq!(floatish(&json!("0.5"), "T", "float").unwrap(), Some(0.5));
        assert_eq!(floatish(&json!(""), "T", "float").unwrap(), None);
    }

    #[test]
    fn floatish_rejects_non_finite_strings() {
        assert!(floatish(&json!("inf"), "T", "float").is_err());
        assert!(floatish(&json!("NaN"), "T", "float").is_err());
        assert!(floatish(&json!([1.0]), "T", "float").is_err());
    }

    #[test]
    fn optional_nonempty_str_folds_empty() {
        assert_eq!(optional_nonempty_str(&json!(""), "T", "s").unwrap(), None);
        assert_eq!(optional_nonempty_str(&json!("a"), "T", "s").unwrap(), Some("a"));
        assert!(optional_nonempty_str(&json!(1), "T", "s").is_err());
    }
}
