//! vCard serialization (RFC 6350).
//!
//! This module provides rendering for the vCard document model.
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{VCard, VCardProperty, VCardVersion, serialize_single};
//!
//! let mut card = VCard::new(VCardVersion::V4);
//! card.add_property(VCardProperty::text("FN", "John Doe").unwrap());
//!
//! let output = serialize_single(&card);
//! assert!(output.ends_with("END:VCARD"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Text escaping of values
//! - Quoting of parameter values containing `:`, `;` or `,`
//! - Synthesized BEGIN/VERSION/END lines

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{
    serialize, serialize_parameter, serialize_property, serialize_single, serialize_value,
};
