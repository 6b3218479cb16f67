//! # Email Addresses
//!
//! [`Email`] is composed of two [`Text`] parts, the local part and the
//! domain. Validation is syntactic only (no DNS): a dot-atom local part and
//! either a dotted hostname or a bracketed IP literal as domain.
//!
//! The empty email (both parts empty) is built from null or `""`; it has a
//! null native and renders as `""`.

use std::net::IpAddr;

use crate::error::ValidationError;
use crate::native::{optional_nonempty_str, Native};
use crate::text::Text;
use crate::value::{native_serde, MakeEmpty, ValueObject};

const EXPECTED: &str = "local@domain address string or null";

/// Characters allowed in a dot-atom local part besides ASCII alphanumerics.
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-.";

/// An email address, or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Email {
    local_part: Text,
    domain: Text,
}

impl Email {
    /// Parse and validate an address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the address is not syntactically valid.
    pub fn new(address: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| {
            ValidationError::new(Self::TYPE_NAME, EXPECTED, format!("{address:?}: {reason}"))
        };
        let (local, domain) = address
            .rsplit_once('@')
            .ok_or_else(|| invalid("missing '@'"))?;
        validate_local_part(local).map_err(|r| invalid(r))?;
        validate_domain(domain).map_err(|r| invalid(r))?;
        Ok(Self {
            local_part: Text::new(local),
            domain: Text::new(domain),
        })
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &Text {
        &self.local_part
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &Text {
        &self.domain
    }
}

fn validate_local_part(local: &str) -> Result<(), &'static str> {
    if local.is_empty() || local.len() > 64 {
        return Err("local part must be 1-64 characters");
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err("local part has a misplaced dot");
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    {
        return Err("local part contains an invalid character");
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), &'static str> {
    if let Some(literal) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        let ip = literal.strip_prefix("IPv6:").unwrap_or(literal);
        return ip
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| "domain literal is not an IP address");
    }
    if domain.is_empty() || domain.len() > 253 {
        return Err("domain must be 1-253 characters");
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err("domain must contain a dot");
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return Err("domain has an invalid label");
    }
    Ok(())
}

impl ValueObject for Email {
    const TYPE_NAME: &'static str = "Email";

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
        self.local_part.is_empty() && self.domain.is_empty()
    }
}

impl MakeEmpty for Email {
    fn make_empty() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

native_serde!(Email);
