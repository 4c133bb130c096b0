//! ## Summary
//! Syntax predicates for vCard value types (RFC 6350 §4).
//!
//! Patterns are compiled once on first use. A pattern that fails to compile
//! makes its predicate reject everything rather than panic.

use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex_lite::Regex;

type Pattern = LazyLock<Option<Regex>>;

static URI: Pattern =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:|/)[^\x00-\x1F\x7F]*$").ok());
static EMAIL: Pattern = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});
static TIMESTAMP: Pattern =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}[0-9]{2}[0-9]{2}T[0-9]{6}(Z|[\-+][0-9]{2,4})?$").ok());
static DATE: Pattern = LazyLock::new(|| Regex::new(r"^([0-9]{4}|\-\-)([0-9]{2}|\-){0,2}$").ok());
static TIME: Pattern =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}|\-){1,3}Z?([\-+][0-9]{2,4}){0,1}$").ok());
static DATE_TIME: Pattern =
    LazyLock::new(|| Regex::new(r"^([0-9]{4}|\-\-)([0-9]{2}|\-){2}T[0-9]{2}([0-9]{2}){0,2}$").ok());
static UTC_OFFSET: Pattern = LazyLock::new(|| Regex::new(r"^[+\-][0-9]{2}([0-9]{2})?$").ok());

fn matches(pattern: &Pattern, s: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(s))
}

/// Value type tags that have a syntax predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    Uri,
    Email,
    Boolean,
    Integer,
    Float,
    Date,
    Time,
    DateTime,
    DateAndOrTime,
    UtcOffset,
    Timestamp,
}

impl ValueFormat {
    /// Parses a tag such as `DATE-TIME` (case-insensitive).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let format = match tag.to_ascii_uppercase().as_str() {
            "URI" => Self::Uri,
            "EMAIL" => Self::Email,
            "BOOLEAN" => Self::Boolean,
            "INTEGER" => Self::Integer,
            "FLOAT" => Self::Float,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "DATE-TIME" => Self::DateTime,
            "DATE-AND-OR-TIME" => Self::DateAndOrTime,
            "UTC-OFFSET" => Self::UtcOffset,
            "TIMESTAMP" => Self::Timestamp,
            _ => return None,
        };
        Some(format)
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uri => "URI",
            Self::Email => "EMAIL",
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::DateTime => "DATE-TIME",
            Self::DateAndOrTime => "DATE-AND-OR-TIME",
            Self::UtcOffset => "UTC-OFFSET",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

impl std::fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Checks `value` against the syntax of `format`.
#[must_use]
pub fn is_valid(value: &str, format: ValueFormat) -> bool {
    match format {
        ValueFormat::Uri => is_uri(value),
        ValueFormat::Email => is_email(value),
        ValueFormat::Boolean => is_boolean(value),
        ValueFormat::Integer => is_integer(value),
        ValueFormat::Float => is_float(value),
        ValueFormat::Date => is_date(value),
        ValueFormat::Time => is_time(value),
        ValueFormat::DateTime => is_date_time(value),
        ValueFormat::DateAndOrTime => is_date_and_or_time(value),
        ValueFormat::UtcOffset => is_utc_offset(value),
        ValueFormat::Timestamp => is_timestamp(value),
    }
}

/// Absolute URI (`scheme:...`) or absolute path, without control characters.
#[must_use]
pub fn is_uri(s: &str) -> bool {
    matches(&URI, s)
}

#[must_use]
pub fn is_email(s: &str) -> bool {
    (3..=254).contains(&s.len()) && matches(&EMAIL, s)
}

/// `true` or `false`, any case.
#[must_use]
pub fn is_boolean(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// Signed 64-bit decimal integer.
#[must_use]
pub fn is_integer(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}

#[must_use]
pub fn is_float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Complete date and time with optional zone, e.g. `19961022T140000Z`.
#[must_use]
pub fn is_timestamp(s: &str) -> bool {
    matches(&TIMESTAMP, s)
}

/// Date, possibly reduced or truncated: `19850412`, `1985-04`, `--0412`, `---12`.
#[must_use]
pub fn is_date(s: &str) -> bool {
    matches(&DATE, s)
}

/// Time, possibly reduced or truncated, with optional zone: `102200Z`, `-2200`.
#[must_use]
pub fn is_time(s: &str) -> bool {
    matches(&TIME, s)
}

#[must_use]
pub fn is_date_time(s: &str) -> bool {
    matches(&DATE_TIME, s)
}

/// Date-time, date, or `T` followed by a time.
#[must_use]
pub fn is_date_and_or_time(s: &str) -> bool {
    is_date_time(s) || is_date(s) || s.strip_prefix('T').is_some_and(is_time)
}

#[must_use]
pub fn is_utc_offset(s: &str) -> bool {
    matches(&UTC_OFFSET, s)
}

/// Standard-alphabet base64 with canonical padding.
#[must_use]
pub fn is_base64(s: &str) -> bool {
    STANDARD.decode(s).is_ok()
}
