//! vCard serialization.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::vcard::catalog::VCARD_MARKER;
use crate::rfc::vcard::core::{
    Address, Gender, Geo, Organization, StructuredName, VCard, VCardParameter, VCardProperty,
    VCardValue,
};

const CRLF: &str = "\r\n";

/// Serializes several vCards, separated by CRLF.
///
/// Each card ends with `END:VCARD`; the separator supplies the terminator
/// between cards, and the last card has none.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            output.push_str(CRLF);
        }
        serialize_vcard(card, &mut output);
    }

    output
}

/// Serializes a single vCard to a string.
///
/// ## Summary
/// Emits `BEGIN:VCARD`, the version line, every stored property in
/// insertion order, then `END:VCARD` without a trailing line terminator.
/// Stored BEGIN, END and VERSION properties are skipped since the
/// serializer always synthesizes them. Each line is folded at 75 octets.
#[must_use]
#[tracing::instrument(
    skip(card),
    fields(version = %card.version(), properties = card.properties().len())
)]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    push_line(&format!("BEGIN:{VCARD_MARKER}"), output);
    output.push_str(CRLF);

    push_line(&format!("VERSION:{}", card.version()), output);
    output.push_str(CRLF);

    for prop in card.properties() {
        if matches!(prop.name(), "BEGIN" | "END" | "VERSION") {
            tracing::trace!(property = prop.name(), "Skipping structural property");
            continue;
        }

        let mut line = String::new();
        serialize_property(prop, &mut line);
        tracing::trace!(property = prop.name(), octets = line.len(), "Rendered property");

        push_line(&line, output);
        output.push_str(CRLF);
    }

    push_line(&format!("END:{VCARD_MARKER}"), output);
}

fn push_line(line: &str, output: &mut String) {
    output.push_str(&fold_line(line));
}

/// Writes the unfolded logical line of a property, without terminator.
///
/// Parameters with no retained non-blank value are omitted.
pub fn serialize_property(prop: &VCardProperty, output: &mut String) {
    output.push_str(prop.name());

    for param in prop.params().iter().filter(|p| !p.is_empty()) {
        output.push(';');
        serialize_parameter(param, output);
    }

    output.push(':');

    for (i, value) in prop.values().iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_value(value, output);
    }
}

/// Writes `NAME=v1,v2`. Values containing a double quote are skipped.
pub fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push_str(param.name());
    output.push('=');

    let values = param.retained_values().filter_map(escape_param_value);
    for (i, value) in values.enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&value);
    }
}

/// Writes the escaped text of a value.
pub fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) => output.push_str(&escape_text(s)),
        VCardValue::StructuredName(name) => serialize_structured_name(name, output),
        VCardValue::Address(addr) => serialize_address(addr, output),
        VCardValue::Organization(org) => serialize_organization(org, output),
        VCardValue::Gender(gender) => serialize_gender(gender, output),
        VCardValue::Geo(geo) => serialize_geo(geo, output),
        VCardValue::Photo(photo) => output.push_str(&escape_text(&photo.value)),
    }
}

fn serialize_structured_name(name: &StructuredName, output: &mut String) {
    // family;given;additional;prefixes;suffixes
    serialize_components(&name.components(), output);
}

fn serialize_address(addr: &Address, output: &mut String) {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    serialize_components(&addr.components(), output);
}

fn serialize_components(components: &[&[String]], output: &mut String) {
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        serialize_component_list(component, output);
    }
}

fn serialize_component_list(values: &[String], output: &mut String) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&escape_text(value));
    }
}

fn serialize_organization(org: &Organization, output: &mut String) {
    output.push_str(&escape_text(&org.name));
    for unit in &org.units {
        output.push(';');
        output.push_str(&escape_text(unit));
    }
}

fn serialize_gender(gender: &Gender, output: &mut String) {
    output.push_str(&escape_text(&gender.sex));
    if !gender.identity.is_empty() {
        output.push(';');
        output.push_str(&escape_text(&gender.identity));
    }
}

fn serialize_geo(geo: &Geo, output: &mut String) {
    output.push_str("geo:");
    output.push_str(&escape_text(&geo.latitude));
    output.push(',');
    output.push_str(&escape_text(&geo.longitude));
    if !geo.altitude.is_empty() {
        output.push(',');
        output.push_str(&escape_text(&geo.altitude));
    }
}
