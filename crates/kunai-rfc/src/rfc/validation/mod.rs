//! Validation predicates for vCard value syntaxes.
//!
//! Validation is advisory: an invalid value still renders. These
//! predicates never panic and carry no side effects.

pub mod format;

pub use format::{
    ValueFormat, is_base64, is_boolean, is_date, is_date_and_or_time, is_date_time, is_email,
    is_float, is_integer, is_time, is_timestamp, is_uri, is_utc_offset, is_valid,
};
