//! # Web Locators
//!
//! [`Url`] splits an absolute URL into [`Text`] components plus an
//! [`IntValue`] port. Parsing follows the WHATWG URL standard (via the `url`
//! crate), so the scheme and host are lowercased, special schemes always
//! carry at least a `/` path, and default ports are dropped. User info is not
//! retained.
//!
//! The native form is rebuilt from the components:
//! `scheme://host[:port]path[?query][#fragment]`. An empty URL (no host) has
//! a null native and renders as `""`.

use crate::error::ValidationError;
use crate::native::{optional_nonempty_str, Native};
use crate::numeric::IntValue;
use crate::text::Text;
use crate::value::{native_serde, MakeEmpty, ValueObject};

const EXPECTED: &str = "absolute URL string with a host, or null";

/// An absolute URL, or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    scheme: Text,
    host: Text,
    port: IntValue,
    path: Text,
    query: Text,
    fragment: Text,
}

impl Url {
    /// Parse and validate a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the string is not an absolute URL with a
    /// host.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let parsed = url::Url::parse(value).map_err(|e| {
            ValidationError::new(Self::TYPE_NAME, EXPECTED, format!("{value:?}: {e}"))
        })?;
        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => {
                return Err(ValidationError::new(
                    Self::TYPE_NAME,
                    EXPECTED,
                    format!("{value:?} has no host"),
                ))
            }
        };
        Ok(Self {
            scheme: Text::new(parsed.scheme()),
            host: Text::new(host),
            port: parsed
                .port()
                .map_or_else(IntValue::make_empty, |p| IntValue::new(i64::from(p))),
            path: Text::new(parsed.path()),
            query: Text::new(parsed.query().unwrap_or_default()),
            fragment: Text::new(parsed.fragment().unwrap_or_default()),
        })
    }

    /// The scheme, e.g. `https`.
    pub fn scheme(&self) -> &Text {
        &self.scheme
    }

    /// The host name or IP literal.
    pub fn host(&self) -> &Text {
        &self.host
    }

    /// The explicit, non-default port; empty when absent.
    pub fn port(&self) -> &IntValue {
        &self.port
    }

    /// Whether an explicit port is present.
    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    /// The path, e.g. `/`.
    pub fn path(&self) -> &Text {
        &self.path
    }

    /// The query string without the leading `?`.
    pub fn query(&self) -> &Text {
        &self.query
    }

    /// The fragment without the leading `#`.
    pub fn fragment(&self) -> &Text {
        &self.fragment
    }
}

impl ValueObject for Url {
    const TYPE_NAME: &'static str = "Url";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match optional_nonempty_str(native, Self::TYPE_NAME, EXPECTED)? {
            Some(s) => Self::new(s),
            None => Ok(Self::default()),
        }
    }

    fn to_native(&self) -> Native {
        if self.is_empty() {
            Native::Null
        } else {
            Native::String(self.to_string())
        }
    }

    fn is_empty(&self) -> bool {
        self.host.is_empty()
    }
}

impl MakeEmpty for Url {
    fn make_empty() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}://{}", self.scheme, self.host)?;
        if self.has_port() {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(self.path.as_str())?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

native_serde!(Url);
