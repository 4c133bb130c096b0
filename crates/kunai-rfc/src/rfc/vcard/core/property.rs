//! vCard property types (RFC 6350).

use super::parameter::VCardParameter;
use super::value::VCardValue;
use crate::rfc::vcard::build::serialize_property;

/// How many instances of a property may exist in one vCard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// `1`: exactly one instance.
    One,
    /// `*1`: at most one instance.
    ZeroOrOne,
    /// `1*`: one or more instances.
    OneOrMore,
    /// `*`: any number of instances.
    #[default]
    Any,
}

impl Cardinality {
    /// Parses a cardinality token. Unknown tokens are coerced to `*`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "1" => Self::One,
            "*1" => Self::ZeroOrOne,
            "1*" => Self::OneOrMore,
            _ => Self::Any,
        }
    }

    /// Returns the cardinality token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::ZeroOrOne => "*1",
            Self::OneOrMore => "1*",
            Self::Any => "*",
        }
    }

    /// Returns whether at most one instance may exist at a time.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::One | Self::ZeroOrOne)
    }
}

impl From<&str> for Cardinality {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vCard property.
///
/// A named container of values and parameters. Parameters are unique by
/// name; adding a parameter whose name already exists merges its values
/// into the existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    name: String,
    cardinality: Cardinality,
    allow_multiple_values: bool,
    values: Vec<VCardValue>,
    params: Vec<VCardParameter>,
}

impl VCardProperty {
    /// Creates an empty property with cardinality `*` that holds a single
    /// value. Returns `None` for an empty name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_ascii_uppercase(),
            cardinality: Cardinality::Any,
            allow_multiple_values: false,
            values: Vec::new(),
            params: Vec::new(),
        })
    }

    /// Creates a property with a pinned cardinality and multiplicity.
    #[must_use]
    pub fn with_definition(
        name: impl Into<String>,
        cardinality: Cardinality,
        allow_multiple_values: bool,
    ) -> Option<Self> {
        let mut prop = Self::new(name)?;
        prop.cardinality = cardinality;
        prop.allow_multiple_values = allow_multiple_values;
        Some(prop)
    }

    /// Creates a `*` property holding one text value.
    ///
    /// Returns `None` if `name` is empty.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Option<Self> {
        let mut prop = Self::new(name)?;
        prop.values.push(VCardValue::Text(value.into()));
        Some(prop)
    }

    /// Returns the (uppercase) property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the property. The name is normalized to uppercase; an empty
    /// name is ignored.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.name = name.to_ascii_uppercase();
        }
    }

    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Sets the cardinality; accepts a [`Cardinality`] or a token such as `"*1"`.
    pub fn set_cardinality(&mut self, cardinality: impl Into<Cardinality>) {
        self.cardinality = cardinality.into();
    }

    /// Whether the value is a list. Advisory: callers use it to decide
    /// between one property with several values and several properties.
    /// It never drops values.
    #[must_use]
    pub fn allows_multiple_values(&self) -> bool {
        self.allow_multiple_values
    }

    pub fn set_allow_multiple_values(&mut self, allow: bool) {
        self.allow_multiple_values = allow;
    }

    /// Appends a value.
    pub fn add_value(&mut self, value: impl Into<VCardValue>) {
        self.values.push(value.into());
    }

    /// Replaces all values.
    pub fn set_values(&mut self, values: Vec<VCardValue>) {
        self.values = values;
    }

    /// Returns the values in order.
    #[must_use]
    pub fn values(&self) -> &[VCardValue] {
        &self.values
    }

    /// Returns the first value, useful for single-valued properties.
    #[must_use]
    pub fn first_value(&self) -> Option<&VCardValue> {
        self.values.first()
    }

    /// Returns the first value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.first_value().and_then(VCardValue::as_text)
    }

    /// Adds a parameter, merging values into an existing parameter of the
    /// same name.
    pub fn add_param(&mut self, param: VCardParameter) {
        if let Some(existing) = self.params.iter_mut().find(|p| p.name() == param.name()) {
            for value in param.values() {
                existing.add_value(value.as_str());
            }
        } else {
            self.params.push(param);
        }
    }

    /// Adds values to the parameter `name`, creating it if needed.
    pub fn add_param_values<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_param(VCardParameter::multi(name, values));
    }

    /// Replaces all parameters. Parameters sharing a name are merged.
    pub fn set_params(&mut self, params: Vec<VCardParameter>) {
        self.params.clear();
        for param in params {
            self.add_param(param);
        }
    }

    /// Returns parameters in insertion order.
    #[must_use]
    pub fn params(&self) -> &[VCardParameter] {
        &self.params
    }

    /// Returns the parameter with the given name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        self.add_param(VCardParameter::type_param(type_value));
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns whether every value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(VCardValue::is_empty)
    }

    /// Structural validation; properties currently accept any content.
    #[must_use]
    pub fn validate(&self) -> bool {
        true
    }

    /// Renders the unfolded logical line `NAME;PARAM=..:value1,value2`.
    ///
    /// A parameter left with no non-blank value after quote filtering is
    /// omitted entirely instead of rendering as a bare `;NAME=`. This is a
    /// deliberate divergence from emitting every stored parameter.
    #[must_use]
    pub fn render(&self) -> String {
        let mut line = String::new();
        serialize_property(self, &mut line);
        line
    }
}

/// Common property names as constants.
pub mod names {
    // Identification properties
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const GENDER: &str = "GENDER";

    // Delivery addressing
    pub const ADR: &str = "ADR";
    pub const LABEL: &str = "LABEL";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const IMPP: &str = "IMPP";
    pub const LANG: &str = "LANG";
    pub const MAILER: &str = "MAILER";

    // Geographical
    pub const TZ: &str = "TZ";
    pub const GEO: &str = "GEO";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const LOGO: &str = "LOGO";
    pub const AGENT: &str = "AGENT";
    pub const ORG: &str = "ORG";
    pub const MEMBER: &str = "MEMBER";
    pub const RELATED: &str = "RELATED";

    // Explanatory
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
    pub const PRODID: &str = "PRODID";
    pub const REV: &str = "REV";
    pub const SORT_STRING: &str = "SORT-STRING";
    pub const SOUND: &str = "SOUND";
    pub const UID: &str = "UID";
    pub const CLIENTPIDMAP: &str = "CLIENTPIDMAP";
    pub const URL: &str = "URL";

    // Security
    pub const CLASS: &str = "CLASS";
    pub const KEY: &str = "KEY";

    // Calendar
    pub const FBURL: &str = "FBURL";
    pub const CALADRURI: &str = "CALADRURI";
    pub const CALURI: &str = "CALURI";

    // General/structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
    pub const NAME: &str = "NAME";
    pub const PROFILE: &str = "PROFILE";
    pub const SOURCE: &str = "SOURCE";
    pub const KIND: &str = "KIND";
    pub const XML: &str = "XML";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::StructuredName;

    #[test]
    fn property_text() {
        let prop = VCardProperty::text("fn", "John Doe").expect("non-empty name");
        assert_eq!(prop.name(), "FN");
        assert_eq!(prop.as_text(), Some("John Doe"));
        assert_eq!(prop.cardinality(), Cardinality::Any);
    }

    #[test]
    fn empty_name_yields_none() {
        assert!(VCardProperty::new("").is_none());
        assert!(VCardProperty::with_definition("", Cardinality::One, false).is_none());
    }

    #[test]
    fn cardinality_tokens_are_coerced() {
        assert_eq!(Cardinality::parse("1"), Cardinality::One);
        assert_eq!(Cardinality::parse("*1"), Cardinality::ZeroOrOne);
        assert_eq!(Cardinality::parse("1*"), Cardinality::OneOrMore);
        assert_eq!(Cardinality::parse("*"), Cardinality::Any);
        assert_eq!(Cardinality::parse("2"), Cardinality::Any);
        assert_eq!(Cardinality::parse(""), Cardinality::Any);

        let mut prop = VCardProperty::text("UID", "x").expect("non-empty name");
        prop.set_cardinality("*1");
        assert!(prop.cardinality().is_singleton());
        prop.set_cardinality("bogus");
        assert_eq!(prop.cardinality().as_str(), "*");
    }

    #[test]
    fn values_accumulate_on_single_valued_property() {
        let mut prop = VCardProperty::text("NOTE", "first").expect("non-empty name");
        assert!(!prop.allows_multiple_values());
        prop.add_value("second");
        assert_eq!(prop.values().len(), 2);
        assert_eq!(prop.as_text(), Some("first"));
        assert_eq!(prop.render(), "NOTE:first,second");
    }

    #[test]
    fn multi_valued_property_appends_values() {
        let mut prop = VCardProperty::with_definition("NICKNAME", Cardinality::Any, true)
            .expect("non-empty name");
        prop.add_value("Jim");
        prop.add_value("Jimmie");
        assert_eq!(prop.render(), "NICKNAME:Jim,Jimmie");
    }

    #[test]
    fn set_values_keeps_every_value() {
        let mut prop = VCardProperty::text("NOTE", "a").expect("non-empty name");
        prop.set_values(vec!["b".into(), "c".into()]);
        assert_eq!(prop.values(), [VCardValue::from("b"), VCardValue::from("c")]);
        assert_eq!(prop.render(), "NOTE:b,c");
    }

    #[test]
    fn text_with_empty_name_yields_none() {
        assert!(VCardProperty::text("", "orphan").is_none());
    }

    #[test]
    fn parameters_merge_by_name() {
        let mut prop = VCardProperty::text("TEL", "+1-555-555-5555").expect("non-empty name");
        prop.add_param(VCardParameter::single("type", "work"));
        prop.add_param(VCardParameter::multi("TYPE", ["home", "work"]));
        prop.add_param(VCardParameter::pref(1));

        assert_eq!(prop.params().len(), 2);
        assert_eq!(
            prop.get_param("type").map(VCardParameter::values),
            Some(&["work".to_string(), "home".to_string()][..])
        );
        assert_eq!(prop.render(), "TEL;TYPE=work,home;PREF=1:+1-555-555-5555");
    }

    #[test]
    fn property_with_types() {
        let mut prop = VCardProperty::text("TEL", "+1-555-555-5555").expect("non-empty name");
        prop.add_type("home");
        prop.add_type("voice");

        assert!(prop.has_type("home"));
        assert!(prop.has_type("VOICE")); // Case-insensitive
    }

    #[test]
    fn empty_parameters_are_not_rendered() {
        let mut prop = VCardProperty::text("NOTE", "hi").expect("non-empty name");
        prop.add_param(VCardParameter::single("X-QUOTED", "\"nope\""));
        prop.add_param(VCardParameter::single("X-BLANK", ""));
        assert_eq!(prop.render(), "NOTE:hi");
        assert!(!prop.render().contains("X-QUOTED="));

        prop.add_param(VCardParameter::multi("TYPE", ["", "work"]));
        assert_eq!(prop.render(), "NOTE;TYPE=,work:hi");
    }

    #[test]
    fn structured_value_line() {
        let mut prop = VCardProperty::new("n").expect("non-empty name");
        prop.add_value(StructuredName::simple("Doe", "Jane"));
        assert_eq!(prop.render(), "N:Doe;Jane;;;");
        assert!(!prop.is_empty());
    }
}
