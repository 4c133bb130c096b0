use thiserror::Error;

/// vCard construction and lookup errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Unsupported vCard version: {0}")]
    UnsupportedVersion(String),

    #[error("Property {name} is not available in vCard {version}")]
    UnavailableProperty { name: String, version: &'static str },

    #[error("Property name must not be empty")]
    EmptyPropertyName,
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
