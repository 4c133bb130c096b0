//! vCard parameter types (RFC 6350 §5).

use crate::rfc::vcard::build::serialize_parameter;

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work). Values are
/// kept in insertion order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    name: String,
    values: Vec<String>,
    allow_multiple_values: bool,
}

impl VCardParameter {
    /// Creates a parameter without values. The name is normalized to uppercase.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: Vec::new(),
            allow_multiple_values: false,
        }
    }

    /// Creates a parameter with a single value.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut param = Self::new(name);
        param.add_value(value);
        param
    }

    /// Creates a multi-valued parameter.
    #[must_use]
    pub fn multi<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut param = Self::new(name);
        param.allow_multiple_values = true;
        param.set_values(values);
        param
    }

    /// Returns the (uppercase) parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the parameter. The name is normalized to uppercase.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into().to_ascii_uppercase();
    }

    /// Returns all values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Appends a value; adding a value already present is a no-op.
    pub fn add_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.values.contains(&value) {
            self.values.push(value);
        }
    }

    /// Replaces all values, dropping duplicates.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.clear();
        for value in values {
            self.add_value(value);
        }
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Returns whether the parameter is declared multi-valued.
    #[must_use]
    pub fn allows_multiple_values(&self) -> bool {
        self.allow_multiple_values
    }

    pub fn set_allow_multiple_values(&mut self, allow: bool) {
        self.allow_multiple_values = allow;
    }

    /// Values that survive rendering: anything containing a double quote
    /// cannot be represented and is dropped.
    pub fn retained_values(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .map(String::as_str)
            .filter(|v| !v.contains('"'))
    }

    /// Returns whether no retained value is non-blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.retained_values().all(str::is_empty)
    }

    /// Structural validation; parameters currently accept any values.
    #[must_use]
    pub fn validate(&self) -> bool {
        true
    }

    /// Renders `NAME=v1,v2`, without the leading `;`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        serialize_parameter(self, &mut output);
        output
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        let mut param = Self::single("TYPE", value);
        param.allow_multiple_values = true;
        param
    }

    /// Creates a PREF parameter with priority (1-100).
    #[must_use]
    pub fn pref(priority: u8) -> Self {
        Self::single("PREF", priority.to_string())
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::single("VALUE", type_name)
    }

    /// Creates a MEDIATYPE parameter (vCard 4.0).
    #[must_use]
    pub fn mediatype(value: impl Into<String>) -> Self {
        Self::single("MEDIATYPE", value)
    }

    /// Creates an ENCODING parameter (vCard 3.0).
    #[must_use]
    pub fn encoding(value: impl Into<String>) -> Self {
        Self::single("ENCODING", value)
    }
}
