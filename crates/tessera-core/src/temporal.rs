//! # Temporal Types: Dates and UTC Timestamps
//!
//! Defines [`Date`] (a calendar day, no time-of-day) and [`Timestamp`] (a
//! UTC instant with microsecond precision).
//!
//! ## Canonical forms
//!
//! - `Date` natives are `YYYY-MM-DD`. Any time-of-day supplied through
//!   [`Date::from_datetime`] or a custom format is truncated.
//! - `Timestamp` natives are RFC 3339 in UTC with six fractional digits and an
//!   explicit `+00:00` offset, e.g. `2026-01-15T12:00:00.000000+00:00`. Inputs
//!   with any other offset are converted to UTC; sub-microsecond digits are
//!   truncated.
//! - `Timestamp` years are limited to `0000..=9999`, the range RFC 3339 can
//!   express. Every constructor rejects instants outside it.
//!
//! ## Empty state
//!
//! Both types accept null and `""` as the empty value; `Timestamp` also
//! accepts the literal `"null"`. Empty dates render as `""`, empty timestamps
//! as `"null"`, and both have a null native.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::error::{ValidationError, ValueError};
use crate::native::{optional_nonempty_str, Native};
use crate::value::{native_serde, MakeEmpty, ValueObject};

// ---------------------------------------------------------------------------
// Date
// ---------------------------------------------------------------------------

/// A calendar date, or empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Option<NaiveDate>);

impl Date {
    /// `chrono` format of the native representation.
    pub const NATIVE_FORMAT: &'static str = "%Y-%m-%d";

    const EXPECTED: &'static str = "YYYY-MM-DD string or null";

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Some(Utc::now().date_naive()))
    }

    /// Wrap a `chrono::NaiveDate`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    /// The calendar day of a UTC instant; the time-of-day is discarded.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(Some(dt.date_naive()))
    }

    /// Parse a date using a `chrono` format string.
    ///
    /// Formats that also carry a time-of-day are accepted; the time is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `value` does not match `format`.
    pub fn from_string(value: &str, format: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, format)
            .or_else(|_| NaiveDateTime::parse_from_str(value, format).map(|dt| dt.date()))
            .map(Self::from_date)
            .map_err(|e| {
                ValidationError::new(
                    Self::TYPE_NAME,
                    Self::EXPECTED,
                    format!("{value:?} does not match {format:?}: {e}"),
                )
            })
    }

    /// Access the inner date.
    pub fn as_date(&self) -> Option<&NaiveDate> {
        self.0.as_ref()
    }
}

impl ValueObject for Date {
    const TYPE_NAME: &'static str = "Date";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match optional_nonempty_str(native, Self::TYPE_NAME, Self::EXPECTED)? {
            Some(s) => Self::from_string(s, Self::NATIVE_FORMAT),
            None => Ok(Self(None)),
        }
    }

    fn to_native(&self) -> Native {
        self.0.map_or(Native::Null, |d| {
            Native::String(d.format(Self::NATIVE_FORMAT).to_string())
        })
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl MakeEmpty for Date {
    fn make_empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(d) => write!(f, "{}", d.format(Self::NATIVE_FORMAT)),
            None => Ok(()),
        }
    }
}

native_serde!(Date);

// ---------------------------------------------------------------------------
// Timestamp
// ---------------------------------------------------------------------------

/// A UTC instant with microsecond precision, or empty.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`.
/// - [`Timestamp::from_time()`]: from non-negative Unix seconds.
/// - [`Timestamp::from_string()`]: from a string in a custom format.
/// - [`ValueObject::from_native()`]: from an RFC 3339 string with any offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// `chrono` format of the native representation.
    pub const NATIVE_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

    const EXPECTED: &'static str = "RFC 3339 timestamp string or null";

    /// Years representable in the native form.
    pub const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

    /// The current UTC time.
    pub fn now() -> Self {
        Self(Some(truncate_to_micros(Utc::now())))
    }

    /// Wrap a UTC instant, truncating to microseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the year falls outside [`Self::YEARS`].
    pub fn from_utc(dt: DateTime<Utc>) -> Result<Self, ValidationError> {
        if !Self::YEARS.contains(&dt.year()) {
            return Err(ValidationError::new(
                Self::TYPE_NAME,
                "instant between years 0000 and 9999",
                format!("year {} cannot be written as RFC 3339", dt.year()),
            ));
        }
        Ok(Self(Some(truncate_to_micros(dt))))
    }

    /// Create a timestamp from Unix seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for negative or out-of-range input.
    pub fn from_time(secs: i64) -> Result<Self, ValidationError> {
        if secs < 0 {
            return Err(ValidationError::new(
                Self::TYPE_NAME,
                "Unix seconds >= 0",
                format!("Unix time must be at least 0, got {secs}"),
            ));
        }
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| {
                ValidationError::new(
                    Self::TYPE_NAME,
                    "Unix seconds >= 0",
                    format!("Unix time {secs} is out of range"),
                )
            })
            .and_then(Self::from_utc)
    }

    /// Parse a timestamp using a `chrono` format string.
    ///
    /// Formats carrying an offset are converted to UTC; formats without one
    /// are interpreted as UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `value` does not match `format` or
    /// names a year outside [`Self::YEARS`].
    pub fn from_string(value: &str, format: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_str(value, format)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| NaiveDateTime::parse_from_str(value, format).map(|dt| dt.and_utc()))
            .map_err(|e| {
                ValidationError::new(
                    Self::TYPE_NAME,
                    Self::EXPECTED,
                    format!("{value:?} does not match {format:?}: {e}"),
                )
            })
            .and_then(Self::from_utc)
    }

    /// Access the inner instant.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        self.0.as_ref()
    }

    /// Unix seconds.
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if the timestamp is empty.
    pub fn epoch_secs(&self) -> Result<i64, ValueError> {
        self.0
            .map(|dt| dt.timestamp())
            .ok_or_else(|| ValueError::empty_state(Self::TYPE_NAME, "epoch_secs"))
    }

    /// Whether `self` is strictly earlier than `other`.
    ///
    /// An empty timestamp sorts before everything, including another empty one.
    pub fn is_before(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => a < b,
        }
    }

    /// Whether `self` is strictly later than `other`.
    ///
    /// An empty timestamp is never after anything; everything non-empty is
    /// after an empty one.
    pub fn is_after(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(a), Some(b)) => a > b,
        }
    }

    /// A new timestamp shifted by `interval` (which may be negative).
    ///
    /// # Errors
    ///
    /// [`ValueError::EmptyState`] if the timestamp is empty;
    /// [`ValueError::Validation`] if the result leaves [`Self::YEARS`].
    pub fn modify(&self, interval: Duration) -> Result<Self, ValueError> {
        let dt = self
            .0
            .ok_or_else(|| ValueError::empty_state(Self::TYPE_NAME, "modify"))?;
        let shifted = dt.checked_add_signed(interval).ok_or_else(|| {
            ValidationError::new(
                Self::TYPE_NAME,
                "instant within the supported range",
                format!("shifting {dt} by {interval} overflows"),
            )
        })?;
        Self::from_utc(shifted).map_err(ValueError::from)
    }
}

impl ValueObject for Timestamp {
    const TYPE_NAME: &'static str = "Timestamp";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match optional_nonempty_str(native, Self::TYPE_NAME, Self::EXPECTED)? {
            None | Some("null") => Ok(Self(None)),
            Some(s) => DateTime::parse_from_rfc3339(s)
                .map_err(|e| {
                    ValidationError::new(
                        Self::TYPE_NAME,
                        Self::EXPECTED,
                        format!("invalid RFC 3339 timestamp {s:?}: {e}"),
                    )
                })
                .and_then(|dt| Self::from_utc(dt.with_timezone(&Utc))),
        }
    }

    fn to_native(&self) -> Native {
        self.0.map_or(Native::Null, |dt| {
            Native::String(dt.format(Self::NATIVE_FORMAT).to_string())
        })
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl MakeEmpty for Timestamp {
    fn make_empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format(Self::NATIVE_FORMAT)),
            None => f.write_str("null"),
        }
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = ValidationError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::from_utc(dt)
    }
}

native_serde!(Timestamp);

/// Drop sub-microsecond digits so the native form is lossless.
fn truncate_to_micros(dt: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = dt.nanosecond();
    dt.with_nanosecond(nanos - nanos % 1_000).unwrap_or(dt)
}
