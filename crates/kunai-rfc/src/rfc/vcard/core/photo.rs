//! Binary-or-reference values (PHOTO, LOGO, SOUND, KEY).
//!
//! A photo value is supplied as one string and classified on construction:
//! a `data:` URI is decomposed into media type, base64 flag and payload,
//! any other URI is kept as a reference, and anything else is treated as an
//! inline payload whose encoding and media type are guessed.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::rfc::validation::{is_base64, is_uri};

/// `data:[<mediatype>][;base64],<data>`
static DATA_URI: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^data:([^:;]+)?(;base64)?,(.*)").ok());

/// Media type reported for payloads that look like text.
pub const TEXT_MEDIA_TYPE: &str = "text/plain; charset=utf-8";
/// Media type reported for payloads that match nothing else.
pub const BINARY_MEDIA_TYPE: &str = "application/octet-stream";

/// A photo, logo, sound or key value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Photo {
    /// URI reference or inline payload (without any `data:` prefix).
    pub value: String,
    /// Whether `value` is a URI reference.
    pub is_url: bool,
    /// Whether `value` is base64 encoded.
    pub is_base64: bool,
    /// Media type of the payload; empty for URI references.
    pub media_type: String,
}

impl Photo {
    /// Creates a photo value, detecting its shape. An empty input yields an
    /// empty value.
    #[must_use]
    pub fn new(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }
        Self::detect(input)
    }

    /// Creates a URI reference without inspecting it.
    #[must_use]
    pub fn url(uri: impl Into<String>) -> Self {
        Self {
            value: uri.into(),
            is_url: true,
            ..Self::default()
        }
    }

    fn detect(input: &str) -> Self {
        if !is_uri(input) {
            return Self {
                value: input.to_string(),
                is_url: false,
                is_base64: is_base64(input),
                media_type: sniff_media_type(input.as_bytes()).to_string(),
            };
        }

        let Some(caps) = DATA_URI.as_ref().and_then(|re| re.captures(input)) else {
            return Self::url(input);
        };

        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        let (media_type, base64_flag, payload) = (group(1), group(2), group(3));

        // The media type group cannot contain ';', so the flag is only ever
        // found in its own group. A missing media type is sniffed from the payload.
        let is_base64 = !base64_flag.is_empty();
        let media_type = if media_type.is_empty() {
            sniff_media_type(payload.as_bytes()).to_string()
        } else {
            media_type.to_string()
        };

        tracing::trace!(%media_type, is_base64, "Decomposed data URI");

        Self {
            value: payload.to_string(),
            is_url: false,
            is_base64,
            media_type,
        }
    }

    /// Returns whether there is no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Guesses a media type from the leading bytes of a payload.
///
/// Recognizes common image, document and archive signatures and a few
/// markup prefixes; otherwise reports text when no control bytes other than
/// whitespace are present, and `application/octet-stream` when they are.
#[must_use]
pub fn sniff_media_type(data: &[u8]) -> &'static str {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xFF\xD8\xFF", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"BM", "image/bmp"),
        (b"\x00\x00\x01\x00", "image/x-icon"),
        (b"%PDF-", "application/pdf"),
        (b"PK\x03\x04", "application/zip"),
        (b"\x1F\x8B\x08", "application/x-gzip"),
    ];
    const MARKUP: &[(&[u8], &str)] = &[
        (b"<?xml", "text/xml; charset=utf-8"),
        (b"<!DOCTYPE HTML", "text/html; charset=utf-8"),
        (b"<HTML", "text/html; charset=utf-8"),
        (b"<SVG", "image/svg+xml"),
    ];

    let head = &data[..data.len().min(512)];

    if let Some(&(_, media_type)) = SIGNATURES.iter().find(|(sig, _)| head.starts_with(sig)) {
        return media_type;
    }
    if head.len() >= 16 && head.starts_with(b"RIFF") && &head[8..15] == b"WEBPVP8" {
        return "image/webp";
    }

    let trimmed = head.trim_ascii_start();
    if let Some(&(_, media_type)) = MARKUP.iter().find(|(prefix, _)| {
        trimmed.len() >= prefix.len() && trimmed[..prefix.len()].eq_ignore_ascii_case(prefix)
    }) {
        return media_type;
    }

    let binary = head
        .iter()
        .any(|&b| matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F));
    if binary {
        BINARY_MEDIA_TYPE
    } else {
        TEXT_MEDIA_TYPE
    }
}
