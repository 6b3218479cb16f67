//! # Postal Addresses
//!
//! [`Address`] is a composite record of six optional [`Text`] fields. Its
//! native form is a mapping that contains only the non-empty fields, in the
//! fixed order of [`AddressField::ALL`]; an address with no fields is empty
//! and has native `{}`.

use crate::error::ValidationError;
use crate::native::{Native, NativeMap};
use crate::text::Text;
use crate::value::{native_serde, MakeEmpty, ValueObject};

const EXPECTED: &str = "mapping of name/address1/address2/city/postcode/country strings, or null";

/// The fields of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// Addressee name.
    Name,
    /// First street line.
    Address1,
    /// Second street line.
    Address2,
    /// City or locality.
    City,
    /// Postal code.
    Postcode,
    /// Country.
    Country,
}

impl AddressField {
    /// All fields in native order.
    pub const ALL: [AddressField; 6] = [
        Self::Name,
        Self::Address1,
        Self::Address2,
        Self::City,
        Self::Postcode,
        Self::Country,
    ];

    /// The native mapping key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::Postcode => "postcode",
            Self::Country => "country",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Address {
    fields: [Text; 6],
}

impl Address {
    /// A field's value; empty text when unset.
    pub fn get(&self, field: AddressField) -> &Text {
        &self.fields[field as usize]
    }

    /// A new address with `field` replaced.
    pub fn with(&self, field: AddressField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.fields[field as usize] = Text::new(value);
        next
    }

    /// Addressee name.
    pub fn name(&self) -> &Text {
        self.get(AddressField::Name)
    }

    /// First street line.
    pub fn address1(&self) -> &Text {
        self.get(AddressField::Address1)
    }

    /// Second street line.
    pub fn address2(&self) -> &Text {
        self.get(AddressField::Address2)
    }

    /// City or locality.
    pub fn city(&self) -> &Text {
        self.get(AddressField::City)
    }

    /// Postal code.
    pub fn postcode(&self) -> &Text {
        self.get(AddressField::Postcode)
    }

    /// Country.
    pub fn country(&self) -> &Text {
        self.get(AddressField::Country)
    }

    fn present(&self) -> impl Iterator<Item = (AddressField, &Text)> + '_ {
        AddressField::ALL
            .into_iter()
            .map(move |f| (f, self.get(f)))
            .filter(|(_, v)| !v.is_empty())
    }
}

impl ValueObject for Address {
    const TYPE_NAME: &'static str = "Address";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        let map = match native {
            Native::Null => return Ok(Self::default()),
            Native::Object(map) => map,
            other => return Err(ValidationError::unsupported(Self::TYPE_NAME, EXPECTED, other)),
        };
        let mut address = Self::default();
        for (key, value) in map {
            let field = AddressField::from_key(key).ok_or_else(|| {
                ValidationError::new(Self::TYPE_NAME, EXPECTED, format!("unknown field {key:?}"))
            })?;
            let text = Text::from_native(value).map_err(|e| {
                ValidationError::new(Self::TYPE_NAME, EXPECTED, format!("field {key:?}: {}", e.reason))
            })?;
            address.fields[field as usize] = text;
        }
        Ok(address)
    }

    fn to_native(&self) -> Native {
        let map: NativeMap = self
            .present()
            .map(|(f, v)| (f.as_str().to_string(), v.to_native()))
            .collect();
        Native::Object(map)
    }

    fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

impl MakeEmpty for Address {
    fn make_empty() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (_, value)) in self.present().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(value.as_str())?;
        }
        Ok(())
    }
}

native_serde!(Address);
