//! vCard line folding.

/// Maximum physical line length in octets (not characters), excluding CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Separator inserted between physical lines of one logical line.
const FOLD: &str = "\r\n ";

/// Folds a logical line into physical lines of at most 75 octets.
///
/// Continuation lines start with a single space, which counts toward their
/// 75 octets. Multi-byte characters are never split: a character that would
/// overflow the current line starts the next one.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let continuation = MAX_LINE_OCTETS - 1;
    let mut folded =
        String::with_capacity(line.len() + (line.len() / continuation + 1) * FOLD.len());
    let mut start = 0;
    let mut budget = MAX_LINE_OCTETS;

    for (idx, c) in line.char_indices() {
        if idx + c.len_utf8() - start > budget {
            folded.push_str(&line[start..idx]);
            folded.push_str(FOLD);
            start = idx;
            budget = continuation;
        }
    }
    folded.push_str(&line[start..]);

    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unfold(folded: &str) -> String {
        folded.replace(FOLD, "")
    }

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn exactly_75_octets_is_not_folded() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line(&line);

        let lines: Vec<&str> = folded.split("\r\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1], " XXXXX");
    }

    #[test]
    fn continuation_lines_hold_74_octets() {
        let line = "X".repeat(75 + 74 + 1);
        let folded = fold_line(&line);

        let lines: Vec<&str> = folded.split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 75);
        assert!(lines[1].starts_with(' '));
        assert_eq!(lines[2], " X");
    }

    #[test]
    fn fold_respects_utf8() {
        // 日 is 3 bytes in UTF-8
        let line = format!("NOTE:{}", "日".repeat(30));
        let folded = fold_line(&line);

        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS);
        }
        // 5 + 23 * 3 = 74 octets fit; the 24th character would make 77.
        assert!(folded.starts_with(&format!("NOTE:{}\r\n ", "日".repeat(23))));
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn every_physical_line_within_limit() {
        for len in [1, 74, 75, 76, 148, 149, 150, 500] {
            let line = "é".repeat(len);
            let folded = fold_line(&line);
            for physical in folded.split("\r\n") {
                assert!(physical.len() <= MAX_LINE_OCTETS, "len {len}");
                assert!(!physical.is_empty() && physical != " ", "len {len}");
            }
            assert_eq!(unfold(&folded), line);
        }
    }

    #[test]
    fn four_byte_characters_stay_contiguous() {
        let line = format!("X:{}", "🦀".repeat(40));
        let folded = fold_line(&line);
        assert_eq!(unfold(&folded), line);
        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS);
        }
    }
}
