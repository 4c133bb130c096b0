//! JSON contact description accepted by the `kunai` binary.

use std::io::Read as _;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppResult;

/// A contact as supplied on input. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// FN; derived from `name` when absent.
    pub formatted_name: Option<String>,
    pub name: Option<ContactName>,
    pub nicknames: Vec<String>,
    pub emails: Vec<TypedValue>,
    pub phones: Vec<TypedValue>,
    pub urls: Vec<TypedValue>,
    pub addresses: Vec<ContactAddress>,
    pub organization: Option<ContactOrganization>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub note: Option<String>,
    pub categories: Vec<String>,
    pub gender: Option<ContactGender>,
    pub geo: Option<ContactGeo>,
    /// URI, `data:` URI, or raw (usually base64) payload.
    pub photo: Option<String>,
    pub birthday: Option<String>,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactName {
    pub family: Vec<String>,
    pub given: Vec<String>,
    pub additional: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

/// A value with TYPE hints and an optional preference (1 is most preferred).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypedValue {
    pub value: String,
    pub types: Vec<String>,
    pub pref: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactAddress {
    pub types: Vec<String>,
    pub po_box: String,
    pub extended: String,
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactOrganization {
    pub name: String,
    pub units: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactGender {
    pub sex: String,
    pub identity: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ContactGeo {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
}

impl Contact {
    /// ## Summary
    /// Parses a contact from JSON text.
    ///
    /// ## Errors
    /// Returns `AppError::Json` if the text is not a valid contact object.
    pub fn from_json(input: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// ## Summary
    /// Reads a contact from `path`, or from stdin when `path` is `None` or `-`.
    ///
    /// ## Errors
    /// Returns an error if the input cannot be read or parsed.
    pub fn read(path: Option<&Path>) -> AppResult<Self> {
        let input = match path {
            Some(path) if path != Path::new("-") => {
                tracing::debug!(path = %path.display(), "Reading contact file");
                std::fs::read_to_string(path)?
            }
            _ => {
                tracing::debug!("Reading contact from stdin");
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        Self::from_json(&input)
    }
}
