//! Per-version property catalog.
//!
//! Each vCard version pins, for every standard property name, a cardinality
//! and whether the property holds a list of values. Properties that a
//! version does not define are reported as [`Availability::Unavailable`].
//! Names that neither version defines are extension properties (`*`,
//! single-valued).

use super::core::{Cardinality, VCardVersion};

/// How a property is constructed for a given version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub cardinality: Cardinality,
    pub allow_multiple_values: bool,
}

impl PropertyDefinition {
    const fn new(cardinality: Cardinality, allow_multiple_values: bool) -> Self {
        Self {
            cardinality,
            allow_multiple_values,
        }
    }

    /// Definition used for extension and otherwise unlisted properties.
    pub const EXTENSION: Self = Self::new(Cardinality::Any, false);
}

/// Result of a catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available(PropertyDefinition),
    Unavailable,
}

impl Availability {
    /// Returns the definition if the property is available.
    #[must_use]
    pub const fn definition(self) -> Option<PropertyDefinition> {
        match self {
            Self::Available(def) => Some(def),
            Self::Unavailable => None,
        }
    }
}

type Entry = (&'static str, Option<PropertyDefinition>);

const ONE: Option<PropertyDefinition> = Some(PropertyDefinition::new(Cardinality::One, false));
const ZERO_OR_ONE: Option<PropertyDefinition> =
    Some(PropertyDefinition::new(Cardinality::ZeroOrOne, false));
const ONE_OR_MORE: Option<PropertyDefinition> =
    Some(PropertyDefinition::new(Cardinality::OneOrMore, false));
const ANY: Option<PropertyDefinition> = Some(PropertyDefinition::EXTENSION);
const ANY_LIST: Option<PropertyDefinition> = Some(PropertyDefinition::new(Cardinality::Any, true));
const UNAVAILABLE: Option<PropertyDefinition> = None;

/// vCard 3.0 (RFC 2426).
const V3: &[Entry] = &[
    ("BEGIN", ONE),
    ("END", ONE),
    ("VERSION", ONE),
    ("FN", ONE),
    ("N", ONE),
    ("PROFILE", ZERO_OR_ONE),
    ("NAME", ZERO_OR_ONE),
    ("SOURCE", ZERO_OR_ONE),
    ("BDAY", ZERO_OR_ONE),
    ("MAILER", ZERO_OR_ONE),
    ("TZ", ZERO_OR_ONE),
    ("REV", ZERO_OR_ONE),
    ("UID", ZERO_OR_ONE),
    ("CLASS", ZERO_OR_ONE),
    ("NICKNAME", ANY_LIST),
    ("PHOTO", ANY),
    ("ADR", ANY),
    ("LABEL", ANY),
    ("TEL", ANY),
    ("EMAIL", ANY),
    ("GEO", ANY),
    ("TITLE", ANY),
    ("ROLE", ANY),
    ("LOGO", ANY),
    ("AGENT", ANY),
    ("ORG", ANY),
    ("CATEGORIES", ANY),
    ("NOTE", ANY),
    ("PRODID", ANY),
    ("SORT-STRING", ANY),
    ("SOUND", ANY),
    ("KEY", ANY),
    ("URL", ANY),
    ("KIND", UNAVAILABLE),
    ("XML", UNAVAILABLE),
    ("GENDER", UNAVAILABLE),
    ("ANNIVERSARY", UNAVAILABLE),
    ("IMPP", UNAVAILABLE),
    ("LANG", UNAVAILABLE),
    ("MEMBER", UNAVAILABLE),
    ("RELATED", UNAVAILABLE),
    ("CLIENTPIDMAP", UNAVAILABLE),
    ("FBURL", UNAVAILABLE),
    ("CALADRURI", UNAVAILABLE),
    ("CALURI", UNAVAILABLE),
];

/// vCard 4.0 (RFC 6350).
const V4: &[Entry] = &[
    ("BEGIN", ONE),
    ("END", ONE),
    ("VERSION", ONE),
    ("FN", ONE_OR_MORE),
    ("KIND", ZERO_OR_ONE),
    ("N", ZERO_OR_ONE),
    ("BDAY", ZERO_OR_ONE),
    ("ANNIVERSARY", ZERO_OR_ONE),
    ("GENDER", ZERO_OR_ONE),
    ("PRODID", ZERO_OR_ONE),
    ("REV", ZERO_OR_ONE),
    ("UID", ZERO_OR_ONE),
    ("NICKNAME", ANY_LIST),
    ("CATEGORIES", ANY_LIST),
    ("SOURCE", ANY),
    ("XML", ANY),
    ("PHOTO", ANY),
    ("ADR", ANY),
    ("TEL", ANY),
    ("EMAIL", ANY),
    ("IMPP", ANY),
    ("LANG", ANY),
    ("TZ", ANY),
    ("GEO", ANY),
    ("TITLE", ANY),
    ("ROLE", ANY),
    ("LOGO", ANY),
    ("ORG", ANY),
    ("MEMBER", ANY),
    ("RELATED", ANY),
    ("NOTE", ANY),
    ("SOUND", ANY),
    ("CLIENTPIDMAP", ANY),
    ("URL", ANY),
    ("KEY", ANY),
    ("FBURL", ANY),
    ("CALADRURI", ANY),
    ("CALURI", ANY),
    ("NAME", UNAVAILABLE),
    ("PROFILE", UNAVAILABLE),
    ("LABEL", UNAVAILABLE),
    ("MAILER", UNAVAILABLE),
    ("AGENT", UNAVAILABLE),
    ("SORT-STRING", UNAVAILABLE),
    ("CLASS", UNAVAILABLE),
];

const fn table(version: VCardVersion) -> &'static [Entry] {
    match version {
        VCardVersion::V3 => V3,
        VCardVersion::V4 => V4,
    }
}

/// ## Summary
/// Looks up how `name` is constructed in `version` (case-insensitive).
///
/// Names listed by neither version are extension properties.
#[must_use]
pub fn lookup(version: VCardVersion, name: &str) -> Availability {
    let entry = table(version)
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name));

    match entry {
        Some((_, Some(def))) => Availability::Available(*def),
        Some((_, None)) => Availability::Unavailable,
        None => Availability::Available(PropertyDefinition::EXTENSION),
    }
}

/// Returns the value a structural property carries by construction.
#[must_use]
pub fn fixed_value(version: VCardVersion, name: &str) -> Option<&'static str> {
    match name.to_ascii_uppercase().as_str() {
        "BEGIN" | "END" => Some(VCARD_MARKER),
        "VERSION" => Some(version.as_str()),
        "PROFILE" if version == VCardVersion::V3 => Some(VCARD_MARKER),
        _ => None,
    }
}

/// Value of the BEGIN and END lines.
pub const VCARD_MARKER: &str = "VCARD";

#[cfg(test)]
mod tests {
    use super::*;

    fn def(version: VCardVersion, name: &str) -> PropertyDefinition {
        lookup(version, name)
            .definition()
            .expect("property should be available")
    }

    #[test]
    fn v3_cardinalities() {
        assert_eq!(def(VCardVersion::V3, "FN").cardinality, Cardinality::One);
        assert_eq!(def(VCardVersion::V3, "N").cardinality, Cardinality::One);
        assert_eq!(def(VCardVersion::V3, "UID").cardinality, Cardinality::ZeroOrOne);
        assert_eq!(def(VCardVersion::V3, "LABEL").cardinality, Cardinality::Any);
        assert!(def(VCardVersion::V3, "NICKNAME").allow_multiple_values);
        assert!(!def(VCardVersion::V3, "CATEGORIES").allow_multiple_values);
    }

    #[test]
    fn v4_cardinalities() {
        assert_eq!(def(VCardVersion::V4, "FN").cardinality, Cardinality::OneOrMore);
        assert_eq!(def(VCardVersion::V4, "N").cardinality, Cardinality::ZeroOrOne);
        assert_eq!(def(VCardVersion::V4, "gender").cardinality, Cardinality::ZeroOrOne);
        assert_eq!(def(VCardVersion::V4, "TZ").cardinality, Cardinality::Any);
        assert!(def(VCardVersion::V4, "CATEGORIES").allow_multiple_values);
    }

    #[test]
    fn unavailable_properties() {
        for name in ["KIND", "GENDER", "IMPP", "ANNIVERSARY", "CALURI"] {
            assert_eq!(lookup(VCardVersion::V3, name), Availability::Unavailable, "{name}");
        }
        for name in ["NAME", "PROFILE", "LABEL", "MAILER", "AGENT", "SORT-STRING", "CLASS"] {
            assert_eq!(lookup(VCardVersion::V4, name), Availability::Unavailable, "{name}");
        }
    }

    #[test]
    fn unknown_names_are_extensions() {
        for version in [VCardVersion::V3, VCardVersion::V4] {
            assert_eq!(
                lookup(version, "X-SOCIAL"),
                Availability::Available(PropertyDefinition::EXTENSION)
            );
        }
    }

    #[test]
    fn fixed_values() {
        assert_eq!(fixed_value(VCardVersion::V4, "begin"), Some("VCARD"));
        assert_eq!(fixed_value(VCardVersion::V3, "VERSION"), Some("3.0"));
        assert_eq!(fixed_value(VCardVersion::V3, "PROFILE"), Some("VCARD"));
        assert_eq!(fixed_value(VCardVersion::V4, "PROFILE"), None);
        assert_eq!(fixed_value(VCardVersion::V4, "FN"), None);
    }
}
