//! vCard core types (RFC 6350).
//!
//! This module provides the document model:
//!
//! - [`VCard`] - Ordered property collection with a conflict policy
//! - [`VCardProperty`] - Individual property with parameters and values
//! - [`VCardParameter`] - Property parameters
//! - [`VCardValue`] - Property value variants
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N property (family, given, etc.)
//! - [`Address`] - ADR property
//! - [`Organization`] - ORG property
//! - [`Gender`] - GENDER property
//! - [`Geo`] - GEO property
//! - [`Photo`] - PHOTO, LOGO, SOUND and KEY properties
//!
//! ## Example
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::core::{VCard, VCardProperty, VCardVersion};
//!
//! let mut card = VCard::new(VCardVersion::V4);
//! card.add_property(VCardProperty::text("FN", "John Doe").unwrap());
//! card.add_property(VCardProperty::text("EMAIL", "john@example.com").unwrap());
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```

mod parameter;
mod photo;
mod property;
mod structured;
mod value;
mod vcard;

pub use parameter::VCardParameter;
pub use photo::{BINARY_MEDIA_TYPE, Photo, TEXT_MEDIA_TYPE, sniff_media_type};
pub use property::{Cardinality, VCardProperty, names};
pub use structured::{Address, Gender, Geo, Organization, Sex, StructuredName};
pub use value::VCardValue;
pub use vcard::{ConflictMode, VCard, VCardVersion};
