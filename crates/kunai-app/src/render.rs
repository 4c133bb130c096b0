//! Maps a [`Contact`] onto a vCard document.

use chrono::{DateTime, Utc};
use kunai_core::config::CardConfig;
use kunai_rfc::rfc::validation::{is_date_and_or_time, is_email};
use kunai_rfc::rfc::vcard::core::{
    Address, ConflictMode, Gender, Geo, Organization, Photo, StructuredName, VCard,
    VCardParameter, VCardProperty, VCardValue, VCardVersion, names,
};

use crate::contact::{Contact, ContactAddress, ContactName, TypedValue};
use crate::error::AppResult;

/// REV timestamp format (basic ISO 8601, UTC).
const REV_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Document settings applied to every rendered contact.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub version: VCardVersion,
    pub conflict_mode: ConflictMode,
    pub product_id: String,
    /// Time stamped into REV.
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    /// ## Summary
    /// Builds options from the card configuration section.
    ///
    /// ## Errors
    /// Returns `RfcError::UnsupportedVersion` if the configured version is
    /// neither 3.0 nor 4.0.
    pub fn from_config(card: &CardConfig, now: DateTime<Utc>) -> AppResult<Self> {
        Ok(Self {
            version: card.version.parse()?,
            conflict_mode: ConflictMode::from(card.conflict_mode.as_str()),
            product_id: card.product_id().to_string(),
            now,
        })
    }
}

/// Generates a UID for contacts that lack one.
#[must_use]
pub fn generate_uid() -> String {
    format!("urn:uuid:{}", uuid::Uuid::new_v4())
}

/// Collects properties for one document, skipping those the version does
/// not define.
struct CardWriter {
    card: VCard,
}

impl CardWriter {
    fn new(options: &RenderOptions) -> Self {
        Self {
            card: VCard::with_conflict_mode(options.version, options.conflict_mode),
        }
    }

    /// Creates `name` through the catalog, or logs and returns `None`.
    fn property(&self, name: &str) -> Option<VCardProperty> {
        match self.card.require_property(name) {
            Ok(prop) => Some(prop),
            Err(e) => {
                tracing::warn!(property = name, error = %e, "Skipping property");
                None
            }
        }
    }

    fn add(&mut self, name: &str, value: impl Into<VCardValue>) {
        self.add_with(name, value, |_| {});
    }

    fn add_with(
        &mut self,
        name: &str,
        value: impl Into<VCardValue>,
        configure: impl FnOnce(&mut VCardProperty),
    ) {
        if let Some(mut prop) = self.property(name) {
            prop.add_value(value);
            configure(&mut prop);
            self.card.add_property(prop);
        }
    }

    /// Adds list items as values of one property when the property holds a
    /// list, otherwise as one property per item.
    fn add_list(&mut self, name: &str, items: &[String]) {
        let Some(template) = items.first().and_then(|_| self.property(name)) else {
            return;
        };

        if template.allows_multiple_values() {
            let mut prop = template;
            for item in items {
                prop.add_value(item.as_str());
            }
            self.card.add_property(prop);
        } else {
            for item in items {
                let mut prop = template.clone();
                prop.add_value(item.as_str());
                self.card.add_property(prop);
            }
        }
    }

    fn add_typed(&mut self, name: &str, typed: &TypedValue) {
        let version = self.card.version();
        self.add_with(name, typed.value.as_str(), |prop| {
            apply_types(prop, &typed.types, typed.pref, version);
        });
    }
}

/// Adds TYPE values and the preference marker for the version: a PREF
/// parameter in 4.0, `TYPE=pref` in 3.0.
fn apply_types(
    prop: &mut VCardProperty,
    types: &[String],
    pref: Option<u8>,
    version: VCardVersion,
) {
    if !types.is_empty() {
        prop.add_param_values("TYPE", types.iter().cloned());
    }
    match (pref, version) {
        (Some(priority), VCardVersion::V4) => prop.add_param(VCardParameter::pref(priority)),
        (Some(_), VCardVersion::V3) => prop.add_type("pref"),
        (None, _) => {}
    }
}

fn structured_name(name: &ContactName) -> StructuredName {
    let mut n = StructuredName::new();
    name.family.iter().for_each(|v| n.add_family(v.as_str()));
    name.given.iter().for_each(|v| n.add_given(v.as_str()));
    name.additional.iter().for_each(|v| n.add_additional(v.as_str()));
    name.prefixes.iter().for_each(|v| n.add_prefix(v.as_str()));
    name.suffixes.iter().for_each(|v| n.add_suffix(v.as_str()));
    n
}

fn address(addr: &ContactAddress) -> Address {
    let component = |s: &str| {
        if s.is_empty() {
            Vec::new()
        } else {
            vec![s.to_string()]
        }
    };
    Address {
        po_box: component(&addr.po_box),
        extended: component(&addr.extended),
        street: component(&addr.street),
        locality: component(&addr.locality),
        region: component(&addr.region),
        postal_code: component(&addr.postal_code),
        country: component(&addr.country),
    }
}

/// Adds the photo with the parameters its shape calls for.
fn add_photo(writer: &mut CardWriter, photo: Photo) {
    let version = writer.card.version();
    let params: Vec<VCardParameter> = match version {
        _ if photo.is_url => vec![VCardParameter::value_type("uri")],
        VCardVersion::V4 => vec![VCardParameter::mediatype(photo.media_type.clone())],
        VCardVersion::V3 => {
            let mut params = Vec::new();
            if photo.is_base64 {
                params.push(VCardParameter::encoding("b"));
            }
            // 3.0 names the image format by its subtype, e.g. TYPE=JPEG.
            if let Some((_, subtype)) = photo.media_type.split_once('/') {
                params.push(VCardParameter::type_param(subtype.to_ascii_uppercase()));
            }
            params
        }
    };
    writer.add_with(names::PHOTO, photo, |prop| {
        for param in params {
            prop.add_param(param);
        }
    });
}

impl Contact {
    /// Returns FN: the explicit formatted name, else the structured name.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.formatted_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                self.name
                    .as_ref()
                    .map(|n| structured_name(n).display_name())
            })
            .unwrap_or_default()
    }

    /// ## Summary
    /// Builds a vCard for this contact.
    ///
    /// Adds FN, N (always in 3.0, where it is required), the contact's own
    /// properties, then UID (generated when missing), REV and PRODID.
    /// Properties the version does not define are skipped with a warning.
    /// Invalid emails and birthdays are logged but still emitted.
    #[must_use]
    #[tracing::instrument(skip_all, fields(version = %options.version))]
    pub fn to_vcard(&self, options: &RenderOptions) -> VCard {
        let mut w = CardWriter::new(options);

        self.write_identification(&mut w);
        self.write_communication(&mut w);
        self.write_organizational(&mut w);

        if let Some(note) = &self.note {
            w.add(names::NOTE, note.as_str());
        }
        w.add_list(names::CATEGORIES, &self.categories);

        let uid = self.uid.clone().unwrap_or_else(generate_uid);
        w.add(names::UID, uid);
        w.add(names::REV, options.now.format(REV_FORMAT).to_string());
        w.add(names::PRODID, options.product_id.as_str());

        tracing::debug!(properties = w.card.properties().len(), "Contact mapped");
        w.card
    }

    fn write_identification(&self, w: &mut CardWriter) {
        let display_name = self.display_name();
        if display_name.is_empty() {
            tracing::warn!("Contact has no formatted name");
        }
        w.add(names::FN, display_name);

        match (&self.name, w.card.version()) {
            (Some(name), _) => w.add(names::N, structured_name(name)),
            (None, VCardVersion::V3) => w.add(names::N, StructuredName::new()),
            (None, VCardVersion::V4) => {}
        }

        w.add_list(names::NICKNAME, &self.nicknames);

        if let Some(photo) = self.photo.as_deref().map(Photo::new).filter(|p| !p.is_empty()) {
            add_photo(w, photo);
        }

        if let Some(birthday) = &self.birthday {
            if !is_date_and_or_time(birthday) {
                tracing::warn!(%birthday, "Birthday is not a valid date-and-or-time");
            }
            w.add(names::BDAY, birthday.as_str());
        }

        if let Some(gender) = &self.gender {
            let value = Gender::new(gender.sex.as_str(), gender.identity.as_str());
            if !value.is_valid() {
                tracing::warn!(sex = %gender.sex, "Unknown gender sex code");
            }
            w.add(names::GENDER, value);
        }
    }

    fn write_communication(&self, w: &mut CardWriter) {
        let version = w.card.version();
        for addr in &self.addresses {
            w.add_with(names::ADR, address(addr), |prop| {
                apply_types(prop, &addr.types, None, version);
            });
        }

        for phone in &self.phones {
            w.add_typed(names::TEL, phone);
        }

        for email in &self.emails {
            if !is_email(&email.value) {
                tracing::warn!(email = %email.value, "Email address looks invalid");
            }
            w.add_typed(names::EMAIL, email);
        }

        for url in &self.urls {
            w.add_typed(names::URL, url);
        }
    }

    fn write_organizational(&self, w: &mut CardWriter) {
        if let Some(geo) = self.geo {
            let (lat, lon) = (geo.latitude.to_string(), geo.longitude.to_string());
            let value = match geo.altitude {
                Some(alt) => Geo::with_altitude(lat, lon, alt.to_string()),
                None => Geo::new(lat, lon),
            };
            w.add(names::GEO, value);
        }

        if let Some(title) = &self.title {
            w.add(names::TITLE, title.as_str());
        }
        if let Some(role) = &self.role {
            w.add(names::ROLE, role.as_str());
        }
        if let Some(org) = &self.organization {
            w.add(
                names::ORG,
                Organization::with_units(org.name.as_str(), org.units.clone()),
            );
        }
    }
}
