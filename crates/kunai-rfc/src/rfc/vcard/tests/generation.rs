//! Document generation tests for vCard.
//!
//! These tests build documents through the public API and compare the
//! rendered text with the expected fixtures.

use super::fixtures::*;
use crate::rfc::vcard::build::{fold_line, serialize_single};
use crate::rfc::vcard::core::{
    Address, ConflictMode, Gender, Geo, Organization, Photo, StructuredName, VCard,
    VCardParameter, VCardProperty, VCardValue, VCardVersion,
};

/// Creates a property through the card's catalog and sets one value.
fn catalog_property(card: &VCard, name: &str, value: impl Into<VCardValue>) -> VCardProperty {
    let mut prop = card
        .create_property(name)
        .unwrap_or_else(|| panic!("{name} should exist in vCard {}", card.version()));
    prop.add_value(value);
    prop
}

/// Creates a free-form text property.
fn text(name: &str, value: impl Into<String>) -> VCardProperty {
    VCardProperty::text(name, value).expect("non-empty name")
}

/// Splits rendered output into physical lines.
fn physical_lines(output: &str) -> Vec<&str> {
    output.split("\r\n").collect()
}

#[test_log::test]
fn author_vcard() {
    let mut card = VCard::new(VCardVersion::V4);

    card.add_property(catalog_property(&card, "FN", "Simon Perreault"));

    let mut name = StructuredName::simple("Perreault", "Simon");
    name.add_suffix("ing. jr");
    name.add_suffix("M.Sc.");
    card.add_property(catalog_property(&card, "N", name));

    card.add_property(catalog_property(&card, "BDAY", "--0203"));
    card.add_property(catalog_property(&card, "GENDER", Gender::new("M", "")));

    for (pref, lang) in [(1, "fr"), (2, "en")] {
        let mut prop = catalog_property(&card, "LANG", lang);
        prop.add_param(VCardParameter::pref(pref));
        card.add_property(prop);
    }

    let mut org = catalog_property(&card, "ORG", Organization::new("Viagenie"));
    org.add_type("work");
    card.add_property(org);

    let mut tel = catalog_property(&card, "TEL", "tel:+1-418-656-9254");
    tel.add_param(VCardParameter::value_type("uri"));
    tel.add_param(VCardParameter::multi("TYPE", ["work", "voice"]));
    tel.add_param(VCardParameter::pref(1));
    card.add_property(tel);

    let mut email = catalog_property(&card, "EMAIL", "simon.perreault@viagenie.ca");
    email.add_type("work");
    card.add_property(email);

    let mut url = catalog_property(&card, "URL", "http://nomis80.org");
    url.add_type("home");
    card.add_property(url);

    assert_eq!(card.build(), VCARD_AUTHOR);
}

#[test_log::test]
fn v3_vcard() {
    let mut card = VCard::new(VCardVersion::V3);

    card.add_property(catalog_property(&card, "FN", "Frank Dawson"));
    card.add_property(catalog_property(&card, "N", StructuredName::simple("Dawson", "Frank")));
    card.add_property(catalog_property(
        &card,
        "ORG",
        Organization::new("Lotus Development Corporation"),
    ));

    let addr = Address {
        street: vec!["6544 Battleford Drive".into()],
        locality: vec!["Raleigh".into()],
        region: vec!["NC".into()],
        postal_code: vec!["27613-3502".into()],
        country: vec!["U.S.A.".into()],
        ..Address::default()
    };
    let mut adr = catalog_property(&card, "ADR", addr);
    adr.add_param_values("TYPE", ["WORK", "POSTAL", "PARCEL"]);
    card.add_property(adr);

    let mut tel = catalog_property(&card, "TEL", "+1-919-676-9515");
    tel.add_param_values("TYPE", ["VOICE", "MSG", "WORK"]);
    card.add_property(tel);

    let mut email = catalog_property(&card, "EMAIL", "Frank_Dawson@Lotus.com");
    email.add_param_values("TYPE", ["INTERNET", "PREF"]);
    card.add_property(email);

    card.add_property(catalog_property(
        &card,
        "URL",
        "http://home.earthlink.net/~fdawson",
    ));

    assert_eq!(serialize_single(&card), VCARD_V3_DAWSON);
}

#[test_log::test]
fn escaping_and_quoting() {
    let mut card = VCard::new(VCardVersion::V4);
    card.add_property(text("FN", "Jane;Doe"));
    card.add_property(catalog_property(&card, "N", StructuredName::simple("Doe", "Jane")));

    let mut tel = text("TEL", "+1-555-555-0100");
    tel.add_param_values("TYPE", ["work", "home"]);
    card.add_property(tel);

    let mut note = text("NOTE", "Backslash \\ comma , newline \n done");
    note.add_param(VCardParameter::single("LABEL", "Line 1, Line 2"));
    note.add_param(VCardParameter::single("X-DROPPED", "say \"cheese\""));
    card.add_property(note);

    let output = card.build();
    assert_eq!(output, VCARD_ESCAPING);
    assert!(output.contains("VERSION:4.0\r\nFN:Jane\\;Doe\r\n"));
    assert!(!output.contains("cheese"));
}

#[test_log::test]
fn structured_values() {
    let mut card = VCard::new(VCardVersion::V4);
    card.add_property(text("FN", "Jane Doe"));
    card.add_property(catalog_property(
        &card,
        "ORG",
        Organization::with_units(
            "ABC, Inc.",
            vec!["North American Division".into(), "Marketing".into()],
        ),
    ));
    card.add_property(catalog_property(&card, "GENDER", Gender::new("F", "she/her")));
    card.add_property(catalog_property(
        &card,
        "GEO",
        Geo::new("37.386013", "-122.082932"),
    ));

    let photo = Photo::new("data:image/png;base64,iVBORw0KGgo=");
    let mut prop = catalog_property(&card, "PHOTO", photo.clone());
    prop.add_param(VCardParameter::mediatype(photo.media_type));
    card.add_property(prop);

    assert_eq!(card.build(), VCARD_STRUCTURED);
}

#[test_log::test]
fn singleton_conflicts_follow_mode() {
    let names = [
        StructuredName::simple("Doe", "Jane"),
        StructuredName::simple("Roe", "Richard"),
    ];

    let mut overwrite = VCard::with_conflict_mode(VCardVersion::V4, ConflictMode::Overwrite);
    let mut ignore = VCard::with_conflict_mode(VCardVersion::V4, ConflictMode::Ignore);
    for name in names {
        overwrite.add_property(catalog_property(&overwrite, "N", name.clone()));
        ignore.add_property(catalog_property(&ignore, "N", name));
    }

    let kept = overwrite.get_property("N");
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].render(), "N:Roe;Richard;;;");

    let kept = ignore.get_property("N");
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].render(), "N:Doe;Jane;;;");
}

#[test_log::test]
fn formatted_name_cardinality_differs_by_version() {
    let mut v4 = VCard::new(VCardVersion::V4);
    let mut v3 = VCard::new(VCardVersion::V3);
    for fn_value in ["Jane Doe", "J. Doe"] {
        v4.add_property(catalog_property(&v4, "FN", fn_value));
        v3.add_property(catalog_property(&v3, "FN", fn_value));
    }

    // FN is `1*` in 4.0 and `1` in 3.0.
    assert_eq!(v4.get_property("FN").len(), 2);
    assert_eq!(v3.get_property("FN").len(), 1);
    assert_eq!(v3.formatted_name(), Some("J. Doe"));
}

#[test]
fn unavailable_properties_are_not_created() {
    let v3 = VCard::new(VCardVersion::V3);
    assert!(v3.create_property("GENDER").is_none());
    assert!(v3.create_property("KIND").is_none());

    let v4 = VCard::new(VCardVersion::V4);
    assert!(v4.create_property("LABEL").is_none());
    assert!(v4.create_property("X-CUSTOM").is_some());
}

#[test]
fn multi_valued_catalog_properties() {
    let mut card = VCard::new(VCardVersion::V4);
    let mut categories = card.create_property("CATEGORIES").expect("CATEGORIES exists");
    categories.add_value("friends");
    categories.add_value("work, mostly");
    card.add_property(categories);

    assert!(card.build().contains("\r\nCATEGORIES:friends,work\\, mostly\r\n"));
}

#[test]
fn single_valued_catalog_property_keeps_added_values() {
    let mut card = VCard::new(VCardVersion::V4);
    let mut note = catalog_property(&card, "NOTE", "first");
    assert!(!note.allows_multiple_values());
    note.add_value("second");
    card.add_property(note);

    assert!(card.build().contains("\r\nNOTE:first,second\r\n"));
}

#[test_log::test]
fn long_multibyte_line_is_folded() {
    let mut card = VCard::new(VCardVersion::V4);
    let note = "日本語のテキスト".repeat(10);
    card.add_property(text("NOTE", note.clone()));

    let output = card.build();
    let lines = physical_lines(&output);
    assert!(lines.len() > 4);
    assert!(lines.iter().all(|line| line.len() <= 75));
    assert!(lines[3..lines.len() - 1].iter().all(|line| line.starts_with(' ')));

    let unfolded = output.replace("\r\n ", "");
    assert!(unfolded.contains(&format!("\r\nNOTE:{note}\r\n")));
}

#[test]
fn folding_preserves_content_for_all_lengths() {
    let pieces = ["a", "é", "€", "𝄞"];
    for piece in pieces {
        for count in 0..200 {
            let line = format!("NOTE:{}", piece.repeat(count));
            let folded = fold_line(&line);

            let physical: Vec<&str> = folded.split("\r\n").collect();
            assert!(
                physical.iter().all(|l| l.len() <= 75),
                "line too long for {piece} x {count}"
            );
            assert!(physical[1..].iter().all(|l| l.starts_with(' ') && l.len() > 1));
            assert_eq!(folded.replace("\r\n ", ""), line);

            if line.len() <= 75 {
                assert_eq!(physical.len(), 1);
            }
        }
    }
}

#[test]
fn exact_fit_has_no_empty_continuation() {
    let line = format!("NOTE:{}", "x".repeat(70));
    assert_eq!(line.len(), 75);
    assert_eq!(fold_line(&line), line);

    let line = format!("NOTE:{}", "x".repeat(70 + 74));
    let folded = fold_line(&line);
    assert_eq!(physical_lines(&folded).len(), 2);
    assert!(!folded.ends_with(' '));
}
