//! # Integer Ranges
//!
//! [`Range`] is an inclusive `[start, end]` interval of integers with
//! `end >= start`. Its native form is a two-element sequence. There is no
//! empty state.

use crate::error::ValidationError;
use crate::native::Native;
use crate::value::{native_serde, ValueObject};

const EXPECTED: &str = "[start, end] integer pair with end >= start";

/// An inclusive integer interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// Create a range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `end < start`.
    pub fn new(start: i64, end: i64) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::new(
                Self::TYPE_NAME,
                EXPECTED,
                format!("end {end} is before start {start}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// First value in the range.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last value in the range.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers covered, saturating at `u64::MAX`.
    pub fn size(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: i64) -> bool {
        (self.start..=self.end).contains(&value)
    }
}

impl ValueObject for Range {
    const TYPE_NAME: &'static str = "Range";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        let items = match native {
            Native::Array(items) => items,
            other => return Err(ValidationError::unsupported(Self::TYPE_NAME, EXPECTED, other)),
        };
        let bounds: Vec<i64> = items.iter().filter_map(Native::as_i64).collect();
        match (items.len(), bounds.as_slice()) {
            (2, [start, end]) => Self::new(*start, *end),
            (2, _) => Err(ValidationError::new(
                Self::TYPE_NAME,
                EXPECTED,
                "range values are not integers",
            )),
            (n, _) => Err(ValidationError::new(
                Self::TYPE_NAME,
                EXPECTED,
                format!("range must have two values, got {n}"),
            )),
        }
    }

    fn to_native(&self) -> Native {
        Native::Array(vec![Native::from(self.start), Native::from(self.end)])
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}

native_serde!(Range);
