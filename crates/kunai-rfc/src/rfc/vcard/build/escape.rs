//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, newline, comma, and semicolon. An already escaped
/// newline marker (`\n` as two characters) goes through the backslash rule
/// and comes out as `\\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {} // Skip CR (use \n for newlines)
            _ => result.push(c),
        }
    }

    result
}

/// Prepares a parameter value for serialization.
///
/// Returns `None` when the value contains a double quote: such values
/// cannot be represented in a parameter and are dropped. Values containing
/// `:`, `;` or `,` are wrapped in double quotes.
#[must_use]
pub fn escape_param_value(s: &str) -> Option<String> {
    if s.contains('"') {
        return None;
    }

    if s.contains([':', ';', ',']) {
        Some(format!("\"{s}\""))
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of `escape_text`, used to check that escaping is lossless.
    fn unescape(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('n' | 'N') => result.push('\n'),
                    Some(other) => result.push(other),
                    None => result.push('\\'),
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    #[test]
    fn escape_text_basic() {
        assert_eq!(escape_text("hello"), "hello");
    }

    #[test]
    fn escape_text_newline() {
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn escape_text_special() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
    }

    #[test]
    fn escape_text_literal_newline_marker() {
        assert_eq!(escape_text("a\\nb"), "a\\\\nb");
    }

    #[test]
    fn escape_text_drops_carriage_return() {
        assert_eq!(escape_text("a\r\nb"), "a\\nb");
    }

    #[test]
    fn escaping_round_trips() {
        for input in [
            "plain",
            "Doe, Jane",
            "C:\\Users\\jane",
            "already \\n escaped",
            "semi;colon, comma\\",
            "\\\\n",
            "two\nlines",
        ] {
            assert_eq!(unescape(&escape_text(input)), input, "input {input:?}");
        }
    }

    #[test]
    fn escape_param_no_quotes() {
        assert_eq!(escape_param_value("simple").as_deref(), Some("simple"));
    }

    #[test]
    fn escape_param_with_colon() {
        assert_eq!(
            escape_param_value("value:with:colons").as_deref(),
            Some("\"value:with:colons\"")
        );
    }

    #[test]
    fn escape_param_with_comma_or_semicolon() {
        assert_eq!(escape_param_value("a,b").as_deref(), Some("\"a,b\""));
        assert_eq!(escape_param_value("a;b").as_deref(), Some("\"a;b\""));
    }

    #[test]
    fn escape_param_with_quote_is_dropped() {
        assert_eq!(escape_param_value("say \"hello\""), None);
        assert_eq!(escape_param_value("\"a:b\""), None);
    }
}
