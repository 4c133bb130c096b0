//! vCard implementation (RFC 6350).
//!
//! This module provides the document model, per-version property catalog
//! and serialization for vCard data. Generation is one-way: there is no
//! parser.
//!
//! ## Overview
//!
//! vCard is a standard format for contact information. This implementation
//! supports both vCard 3.0 (RFC 2426) and 4.0 (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{StructuredName, VCard, VCardProperty, VCardVersion};
//!
//! let mut card = VCard::new(VCardVersion::V4);
//! card.add_property(VCardProperty::text("FN", "Jane;Doe").unwrap());
//!
//! let mut n = card.create_property("N").unwrap();
//! n.add_value(StructuredName::simple("Doe", "Jane"));
//! card.add_property(n);
//!
//! let output = card.build();
//! assert!(output.contains("FN:Jane\\;Doe\r\n"));
//! assert!(output.contains("N:Doe;Jane;;;\r\n"));
//! assert!(output.ends_with("END:VCARD"));
//! ```
//!
//! ## Conflict policy
//!
//! Properties with cardinality `1` or `*1` are singletons. Adding one while
//! a property of the same name exists either keeps the first
//! ([`ConflictMode::Ignore`]) or replaces every earlier instance
//! ([`ConflictMode::Overwrite`], the default).
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`catalog`] - Per-version property definitions
//! - [`build`] - Serialization functions

pub mod build;
pub mod catalog;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use self::build::{serialize, serialize_single};
pub use self::catalog::{Availability, PropertyDefinition, lookup};
pub use self::core::{
    Address, Cardinality, ConflictMode, Gender, Geo, Organization, Photo, Sex, StructuredName,
    VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion,
};
