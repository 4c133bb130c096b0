//! vCard document type.

use super::property::VCardProperty;
use super::value::VCardValue;
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::serialize_single;
use crate::rfc::vcard::catalog::{self, Availability};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl std::str::FromStr for VCardVersion {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" => Ok(Self::V3),
            "4.0" => Ok(Self::V4),
            other => Err(RfcError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl std::fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens when a singleton property is added while one with the same
/// name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConflictMode {
    /// Keep the existing property; the new one is discarded.
    Ignore,
    /// Remove every existing property with that name, then append.
    #[default]
    Overwrite,
}

impl ConflictMode {
    /// Parses a mode token (case-insensitive). Unknown tokens are coerced to
    /// `overwrite`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("ignore") {
            Self::Ignore
        } else {
            Self::Overwrite
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Overwrite => "overwrite",
        }
    }
}

impl From<&str> for ConflictMode {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

/// A vCard document: an ordered collection of properties.
///
/// Adding a property with cardinality `1` or `*1` applies the conflict mode,
/// so at most one instance of each singleton name is ever stored. Each add
/// scans the collection once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCard {
    version: VCardVersion,
    conflict_mode: ConflictMode,
    properties: Vec<VCardProperty>,
}

impl Default for VCard {
    fn default() -> Self {
        Self::new(VCardVersion::default())
    }
}

impl VCard {
    /// Creates an empty vCard of the given version in `overwrite` mode.
    #[must_use]
    pub fn new(version: VCardVersion) -> Self {
        Self {
            version,
            conflict_mode: ConflictMode::default(),
            properties: Vec::new(),
        }
    }

    /// Creates an empty vCard with an explicit conflict mode.
    #[must_use]
    pub fn with_conflict_mode(
        version: VCardVersion,
        conflict_mode: impl Into<ConflictMode>,
    ) -> Self {
        Self {
            version,
            conflict_mode: conflict_mode.into(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn version(&self) -> VCardVersion {
        self.version
    }

    #[must_use]
    pub fn conflict_mode(&self) -> ConflictMode {
        self.conflict_mode
    }

    /// Changes the conflict mode for subsequent adds.
    pub fn set_conflict_mode(&mut self, conflict_mode: impl Into<ConflictMode>) {
        self.conflict_mode = conflict_mode.into();
    }

    /// Adds a property, applying the conflict mode to singleton properties.
    pub fn add_property(&mut self, prop: VCardProperty) {
        if !prop.cardinality().is_singleton() {
            self.properties.push(prop);
            return;
        }

        let name = prop.name();
        match self.conflict_mode {
            ConflictMode::Ignore => {
                if self.properties.iter().any(|p| p.name() == name) {
                    tracing::debug!(property = name, "Ignoring duplicate singleton property");
                    return;
                }
            }
            ConflictMode::Overwrite => {
                let before = self.properties.len();
                self.properties.retain(|p| p.name() != name);
                let removed = before - self.properties.len();
                if removed > 0 {
                    tracing::debug!(property = name, removed, "Overwriting singleton property");
                }
            }
        }

        self.properties.push(prop);
    }

    /// Returns all properties with the given name (case-insensitive), in order.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Vec<&VCardProperty> {
        self.properties
            .iter()
            .filter(|p| p.name().eq_ignore_ascii_case(name))
            .collect()
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn first_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Removes every property with the given name (case-insensitive).
    pub fn delete_property(&mut self, name: &str) {
        let matches = |p: &VCardProperty| p.name().eq_ignore_ascii_case(name);
        self.properties.retain(|p| !matches(p));
    }

    /// Returns all properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[VCardProperty] {
        &self.properties
    }

    /// Returns the formatted name (FN property value).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_property("FN")?.as_text()
    }

    /// Returns the UID property value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.first_property("UID")?.as_text()
    }

    /// Returns whether the vCard has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Structural validation; documents currently accept any content.
    #[must_use]
    pub fn validate(&self) -> bool {
        true
    }

    /// Creates an empty property as this vCard's version defines it.
    ///
    /// Returns `None` for an empty name or a property the version does not
    /// define. Structural properties come with their fixed value.
    #[must_use]
    pub fn create_property(&self, name: &str) -> Option<VCardProperty> {
        self.require_property(name).ok()
    }

    /// Like [`VCard::create_property`], but reports why no property was made.
    ///
    /// ## Errors
    /// `EmptyPropertyName` for an empty name, `UnavailableProperty` when the
    /// version does not define `name`.
    pub fn require_property(&self, name: &str) -> RfcResult<VCardProperty> {
        if name.is_empty() {
            return Err(RfcError::EmptyPropertyName);
        }

        let Availability::Available(def) = catalog::lookup(self.version, name) else {
            return Err(RfcError::UnavailableProperty {
                name: name.to_ascii_uppercase(),
                version: self.version.as_str(),
            });
        };

        let mut prop = VCardProperty::with_definition(
            name,
            def.cardinality,
            def.allow_multiple_values,
        )
        .ok_or(RfcError::EmptyPropertyName)?;
        if let Some(value) = catalog::fixed_value(self.version, name) {
            prop.add_value(VCardValue::from(value));
        }
        Ok(prop)
    }

    /// Renders the vCard. The output ends with `END:VCARD` and no line
    /// terminator.
    #[must_use]
    pub fn build(&self) -> String {
        serialize_single(self)
    }
}
