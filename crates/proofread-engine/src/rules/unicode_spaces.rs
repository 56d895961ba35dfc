use crate::extractors::excerpt::{excerpt, DEFAULT_PAD};
use crate::patterns::{unicode_space_name, UNICODE_SPACE};
use shared_types::Finding;

/// Reports every non-ASCII space in a page's text, one finding per character.
/// Unlike the line checks this runs over the whole page and fires on a
/// single occurrence.
pub fn check_unicode_spaces(text: &str, page: u32) -> Vec<Finding> {
    let mut findings = Vec::new();

    for m in UNICODE_SPACE.find_iter(text) {
        let Some(c) = m.as_str().chars().next() else {
            continue;
        };
        findings.push(Finding::spacing(
            page,
            excerpt(text, m.start(), m.end(), DEFAULT_PAD),
            format!(
                "Unicode space detected: U+{:04X} ({}).",
                c as u32,
                unicode_space_name(c)
            ),
            "Replace with a regular ASCII space.",
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_nbsp_is_reported() {
        let findings = check_unicode_spaces("Hello\u{00A0}world", 2);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].problem.starts_with("Unicode space detected"));
        assert!(findings[0].problem.contains("U+00A0"));
        assert_eq!(findings[0].page, 2);
        assert_eq!(findings[0].sentence_or_excerpt, "Hello\u{00A0}world");
        assert_eq!(findings[0].suggestion, "Replace with a regular ASCII space.");
    }

    #[test]
    fn test_each_occurrence_is_reported() {
        let findings = check_unicode_spaces("a\u{2009}b\u{202F}c\u{3000}d", 1);
        let problems: Vec<&str> = findings.iter().map(|f| f.problem.as_str()).collect();
        assert_eq!(
            problems,
            vec![
                "Unicode space detected: U+2009 (thin space).",
                "Unicode space detected: U+202F (narrow no-break space).",
                "Unicode space detected: U+3000 (ideographic space).",
            ]
        );
    }

    #[test]
    fn test_excerpt_spans_lines() {
        let text = format!("{}\nab\u{00A0}cd\n{}", "p".repeat(60), "q".repeat(60));
        let findings = check_unicode_spaces(&text, 1);
        assert_eq!(findings.len(), 1);
        let excerpt = &findings[0].sentence_or_excerpt;
        assert_eq!(excerpt.chars().count(), 81);
        assert!(excerpt.contains("\nab\u{00A0}cd\n"));
    }

    #[test]
    fn test_ascii_text_has_no_findings() {
        assert!(check_unicode_spaces("plain  ascii\ttext", 1).is_empty());
        assert!(check_unicode_spaces("", 1).is_empty());
    }
}
