//! # SHA-256 Hash Values
//!
//! [`Sha256`] holds a SHA-256 digest in its canonical textual form: exactly
//! 64 lowercase hex characters. Uppercase input is rejected rather than
//! normalized, so a hash string never changes on the way through.

use rand::RngCore;
use sha2::Digest;

use crate::error::ValidationError;
use crate::native::{optional_nonempty_str, Native};
use crate::value::{native_serde, MakeEmpty, ValueObject};

/// A SHA-256 hex digest, or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sha256(Option<String>);

impl Sha256 {
    const EXPECTED: &'static str = "64 lowercase hex characters or null";

    /// Validate and wrap a hex digest.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] unless `hex` is 64 lowercase hex characters.
    pub fn new(hex: impl Into<String>) -> Result<Self, ValidationError> {
        let hex = hex.into();
        let well_formed =
            hex.len() == 64 && hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            return Err(ValidationError::new(
                Self::TYPE_NAME,
                Self::EXPECTED,
                format!("invalid format: {hex:?}"),
            ));
        }
        Ok(Self(Some(hex)))
    }

    /// Hash arbitrary bytes.
    pub fn digest(data: impl AsRef<[u8]>) -> Self {
        let hash = sha2::Sha256::digest(data.as_ref());
        Self(Some(hash.iter().map(|b| format!("{b:02x}")).collect()))
    }

    /// A random digest, for use as an opaque unique token.
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        Self::digest(seed)
    }

    /// The hex string, or `None` when empty.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl ValueObject for Sha256 {
    const TYPE_NAME: &'static str = "Sha256";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match optional_nonempty_str(native, Self::TYPE_NAME, Self::EXPECTED)? {
            Some(s) => Self::new(s),
            None => Ok(Self(None)),
        }
    }

    fn to_native(&self) -> Native {
        self.0.clone().map_or(Native::Null, Native::String)
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl MakeEmpty for Sha256 {
    fn make_empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Display for Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or_default())
    }
}

native_serde!(Sha256);
