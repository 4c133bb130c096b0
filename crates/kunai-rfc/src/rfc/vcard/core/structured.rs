//! Structured vCard types (RFC 6350).
//!
//! These types represent structured property values like N, ADR, ORG,
//! GENDER and GEO.

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// All components are optional per RFC 6350.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates an empty structured name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        let mut name = Self::new();
        name.add_family(family);
        name.add_given(given);
        name
    }

    /// Adds a family name; empty components are skipped.
    pub fn add_family(&mut self, value: impl Into<String>) {
        push_non_empty(&mut self.family, value.into());
    }

    /// Adds a given name; empty components are skipped.
    pub fn add_given(&mut self, value: impl Into<String>) {
        push_non_empty(&mut self.given, value.into());
    }

    /// Adds an additional (middle) name; empty components are skipped.
    pub fn add_additional(&mut self, value: impl Into<String>) {
        push_non_empty(&mut self.additional, value.into());
    }

    /// Adds an honorific prefix; empty components are skipped.
    pub fn add_prefix(&mut self, value: impl Into<String>) {
        push_non_empty(&mut self.prefixes, value.into());
    }

    /// Adds an honorific suffix; empty components are skipped.
    pub fn add_suffix(&mut self, value: impl Into<String>) {
        push_non_empty(&mut self.suffixes, value.into());
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }

    /// Components in serialization order.
    #[must_use]
    pub fn components(&self) -> [&[String]; 5] {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.given.join(" "), self.family.join(" ")]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn push_non_empty(list: &mut Vec<String>, value: String) {
    if !value.is_empty() {
        list.push(value);
    }
}

/// Address (ADR property, RFC 6350 §6.3.1).
///
/// All components are optional per RFC 6350. Each component may carry
/// several values (e.g., multi-line street addresses).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state or province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl Address {
    /// Creates an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the address is empty.
    ///
    /// Blank component values count as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components()
            .iter()
            .all(|c| c.iter().all(String::is_empty))
    }

    /// Components in serialization order.
    #[must_use]
    pub fn components(&self) -> [&[String]; 7] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .flat_map(|v| v.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Organization (ORG property, RFC 6350 §6.6.4).
///
/// First value is the organizational name, subsequent values are
/// organizational units in order of decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Organizational units (department, division, etc.).
    pub units: Vec<String>,
}

impl Organization {
    /// Creates an organization with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Creates an organization with name and units.
    #[must_use]
    pub fn with_units(name: impl Into<String>, units: Vec<String>) -> Self {
        Self {
            name: name.into(),
            units,
        }
    }

    /// Returns whether the organization is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.units.is_empty()
    }
}

/// Gender (GENDER property, RFC 6350 §6.2.7).
///
/// The sex component is kept as text so that an unrecognized letter still
/// renders; [`Gender::is_valid`] reports whether it is one of the known codes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gender {
    /// Sex component: a single letter, or empty.
    pub sex: String,
    /// Gender identity text (free-form).
    pub identity: String,
}

impl Gender {
    /// Creates a gender from raw sex and identity components.
    #[must_use]
    pub fn new(sex: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            sex: sex.into(),
            identity: identity.into(),
        }
    }

    /// Creates a gender with just sex.
    #[must_use]
    pub fn sex(sex: Sex) -> Self {
        Self::new(sex.as_char(), "")
    }

    /// Creates a gender with just identity text.
    #[must_use]
    pub fn identity(text: impl Into<String>) -> Self {
        Self::new("", text)
    }

    /// Returns the sex component if it is a recognized code.
    #[must_use]
    pub fn parsed_sex(&self) -> Option<Sex> {
        let mut chars = self.sex.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Sex::from_char(c),
            _ => Option::None,
        }
    }

    /// Returns whether the sex component is empty or one of
    /// `A`, `M`, `F`, `O`, `N`, `U`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self.sex.as_str(), "" | "A" | "M" | "F" | "O" | "N" | "U")
    }

    /// Returns whether both components are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sex.is_empty() && self.identity.is_empty()
    }
}

/// Sex component of GENDER property (RFC 6350 §6.2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other.
    Other,
    /// None or not applicable.
    None,
    /// Unknown.
    Unknown,
}

impl Sex {
    /// Parses from single character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' | 'm' => Some(Self::Male),
            'F' | 'f' => Some(Self::Female),
            'O' | 'o' => Some(Self::Other),
            'N' | 'n' => Some(Self::None),
            'U' | 'u' => Some(Self::Unknown),
            _ => Option::None,
        }
    }

    /// Returns the single-character representation.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Other => 'O',
            Self::None => 'N',
            Self::Unknown => 'U',
        }
    }
}

/// Geographic position (GEO property, RFC 6350 §6.5.2, RFC 5870 `geo:` URI).
///
/// Coordinates are kept as text exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geo {
    /// Latitude in decimal degrees.
    pub latitude: String,
    /// Longitude in decimal degrees.
    pub longitude: String,
    /// Altitude in meters; omitted from output when empty.
    pub altitude: String,
}

impl Geo {
    /// Creates a position without altitude.
    #[must_use]
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            altitude: String::new(),
        }
    }

    /// Creates a position with altitude.
    #[must_use]
    pub fn with_altitude(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        altitude: impl Into<String>,
    ) -> Self {
        Self {
            altitude: altitude.into(),
            ..Self::new(latitude, longitude)
        }
    }

    /// Returns whether latitude and longitude are numeric and in range,
    /// and the altitude (if present) is numeric.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let in_range = |value: &str, limit: f64| {
            value
                .parse::<f64>()
                .is_ok_and(|v| v.is_finite() && v.abs() <= limit)
        };

        in_range(&self.latitude, 90.0)
            && in_range(&self.longitude, 180.0)
            && (self.altitude.is_empty()
                || self.altitude.parse::<f64>().is_ok_and(f64::is_finite))
    }

    /// Returns whether no coordinate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latitude.is_empty() && self.longitude.is_empty() && self.altitude.is_empty()
    }
}
