//! vCard value types (RFC 6350 §4).

use super::photo::Photo;
use super::structured::{Address, Gender, Geo, Organization, StructuredName};
use crate::rfc::validation::{ValueFormat, is_valid};
use crate::rfc::vcard::build::serialize_value;

/// A vCard property value.
///
/// Every variant renders to a single escaped string; structured variants
/// join their independently escaped components with unescaped separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Text value (RFC 6350 §4.1).
    Text(String),

    /// Structured name (N property).
    StructuredName(StructuredName),

    /// Address (ADR property).
    Address(Address),

    /// Organization (ORG property).
    Organization(Organization),

    /// Gender (GENDER property).
    Gender(Gender),

    /// Geographic position (GEO property).
    Geo(Geo),

    /// Inline or referenced binary (PHOTO, LOGO, SOUND, KEY).
    Photo(Photo),
}

impl VCardValue {
    /// Renders the value as escaped property-value text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        serialize_value(self, &mut output);
        output
    }

    /// Returns whether the value carries no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::StructuredName(n) => n.is_empty(),
            Self::Address(a) => a.is_empty(),
            Self::Organization(o) => o.is_empty(),
            Self::Gender(g) => g.is_empty(),
            Self::Geo(g) => g.is_empty(),
            Self::Photo(p) => p.is_empty(),
        }
    }

    /// Returns the value type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "TEXT",
            Self::StructuredName(_) => "NAME",
            Self::Address(_) => "ADDRESS",
            Self::Organization(_) => "ORG",
            Self::Gender(_) => "GENDER",
            Self::Geo(_) => "GEO",
            Self::Photo(_) => "PHOTO",
        }
    }

    /// Checks the value's own constraints.
    ///
    /// Advisory only: invalid values still render.
    #[must_use]
    pub fn validate(&self) -> bool {
        match self {
            Self::Gender(g) => g.is_valid(),
            Self::Geo(g) => g.is_valid(),
            Self::Text(_)
            | Self::StructuredName(_)
            | Self::Address(_)
            | Self::Organization(_)
            | Self::Photo(_) => true,
        }
    }

    /// Checks the value against a value-type tag such as `EMAIL` or `DATE`.
    ///
    /// Text values are checked with the tag's syntax predicate; tags without
    /// one accept any text. Other variants accept only their own type name.
    #[must_use]
    pub fn validate_as(&self, tag: &str) -> bool {
        match self {
            Self::Text(s) => ValueFormat::parse(tag).is_none_or(|format| is_valid(s, format)),
            _ => self.type_name().eq_ignore_ascii_case(tag),
        }
    }

    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a structured name if applicable.
    #[must_use]
    pub fn as_structured_name(&self) -> Option<&StructuredName> {
        match self {
            Self::StructuredName(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as a photo if applicable.
    #[must_use]
    pub fn as_photo(&self) -> Option<&Photo> {
        match self {
            Self::Photo(p) => Some(p),
            _ => None,
        }
    }
}

impl From<String> for VCardValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for VCardValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<StructuredName> for VCardValue {
    fn from(n: StructuredName) -> Self {
        Self::StructuredName(n)
    }
}

impl From<Address> for VCardValue {
    fn from(a: Address) -> Self {
        Self::Address(a)
    }
}

impl From<Organization> for VCardValue {
    fn from(o: Organization) -> Self {
        Self::Organization(o)
    }
}

impl From<Gender> for VCardValue {
    fn from(g: Gender) -> Self {
        Self::Gender(g)
    }
}

impl From<Geo> for VCardValue {
    fn from(g: Geo) -> Self {
        Self::Geo(g)
    }
}

impl From<Photo> for VCardValue {
    fn from(p: Photo) -> Self {
        Self::Photo(p)
    }
}
