//! Line-level spacing checks
//!
//! Each check looks at a single line of whitespace-preserved page text and
//! reports every occurrence, left to right. Checks are independent: the same
//! run of spaces may be reported by more than one of them.

use crate::extractors::excerpt::{excerpt, head_chars, tail_chars, DEFAULT_PAD};
use crate::patterns::{
    LEADING_SPACES, MANY_AFTER_PUNCT, SPACE_BEFORE_PUNCT, SPACE_RUN, TRAILING_SPACES,
};
use shared_types::Finding;

/// Characters of the line quoted for leading/trailing space findings
pub const LINE_EDGE_EXCERPT: usize = 80;

/// Runs every line check in order: double spaces, space before punctuation,
/// spaces after punctuation, leading spaces, trailing spaces
pub fn check_line(line: &str, page: u32) -> Vec<Finding> {
    let mut findings = Vec::new();
    findings.extend(check_double_spaces(line, page));
    findings.extend(check_space_before_punctuation(line, page));
    findings.extend(check_spaces_after_punctuation(line, page));
    findings.extend(check_leading_spaces(line, page));
    findings.extend(check_trailing_spaces(line, page));
    findings
}

/// Two or more spaces between non-space characters
pub fn check_double_spaces(line: &str, page: u32) -> Vec<Finding> {
    let mut findings = Vec::new();

    // Runs are matched alone so a one-character word can flank two runs
    for run in SPACE_RUN.find_iter(line) {
        let (Some(left), Some(right)) = (
            line[..run.start()].chars().next_back(),
            line[run.end()..].chars().next(),
        ) else {
            continue;
        };
        if left.is_whitespace() || right.is_whitespace() {
            continue;
        }
        let start = run.start() - left.len_utf8();
        let end = run.end() + right.len_utf8();

        // Quote the whole words around the run so the fix can be applied as-is
        let word_start = line[..start]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + line[i..].chars().next().map_or(1, char::len_utf8));
        let word_end = line[end..]
            .find(char::is_whitespace)
            .map_or(line.len(), |i| end + i);

        let bad = &line[word_start..word_end];
        let fixed = format!(
            "{} {}",
            &line[word_start..run.start()],
            &line[run.end()..word_end]
        );

        findings.push(Finding::spacing(
            page,
            excerpt(line, start, end, DEFAULT_PAD),
            "Multiple consecutive spaces between words.",
            format!("Replace “{}” with “{}”.", bad, fixed),
        ));
    }

    findings
}

/// Spaces directly in front of `, . ; : ? !`
pub fn check_space_before_punctuation(line: &str, page: u32) -> Vec<Finding> {
    let mut findings = Vec::new();

    for caps in SPACE_BEFORE_PUNCT.captures_iter(line) {
        let (Some(whole), Some(punct)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let punct = punct.as_str();
        findings.push(Finding::spacing(
            page,
            excerpt(line, whole.start(), whole.end(), DEFAULT_PAD),
            format!("Space before punctuation “{}”.", punct),
            format!("Remove the space before “{}”.", punct),
        ));
    }

    findings
}

/// Two or more spaces after `, . ; : ? !`
pub fn check_spaces_after_punctuation(line: &str, page: u32) -> Vec<Finding> {
    let mut findings = Vec::new();

    for caps in MANY_AFTER_PUNCT.captures_iter(line) {
        let (Some(whole), Some(punct)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        findings.push(Finding::spacing(
            page,
            excerpt(line, whole.start(), whole.end(), DEFAULT_PAD),
            format!("Multiple spaces after “{}”.", punct.as_str()),
            "Use a single space after punctuation.",
        ));
    }

    findings
}

/// Line starts with two or more spaces
pub fn check_leading_spaces(line: &str, page: u32) -> Vec<Finding> {
    if !LEADING_SPACES.is_match(line) {
        return Vec::new();
    }
    vec![Finding::spacing(
        page,
        head_chars(line, LINE_EDGE_EXCERPT),
        "Leading extra spaces at line start.",
        "Remove leading spaces unless an indent is intended.",
    )]
}

/// Line ends with two or more spaces
pub fn check_trailing_spaces(line: &str, page: u32) -> Vec<Finding> {
    if !TRAILING_SPACES.is_match(line) {
        return Vec::new();
    }
    vec![Finding::spacing(
        page,
        tail_chars(line, LINE_EDGE_EXCERPT),
        "Trailing extra spaces at line end.",
        "Remove trailing spaces.",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::FindingKind;

    #[test]
    fn test_flags_double_space_between_words() {
        let findings = check_double_spaces("Hello  world.", 1);
        assert_eq!(findings.len(), 1);
        let f = &findings[0];
        assert_eq!(f.kind, FindingKind::Spacing);
        assert_eq!(f.page, 1);
        assert!(f.problem.contains("Multiple consecutive spaces"));
        assert_eq!(f.suggestion, "Replace “Hello  world.” with “Hello world.”.");
        assert_eq!(f.sentence_or_excerpt, "Hello  world.");
    }

    #[test]
    fn test_double_space_suggestion_keeps_mixed_run_verbatim() {
        let findings = check_double_spaces("one \u{2009} two", 4);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].suggestion,
            "Replace “one \u{2009} two” with “one two”."
        );
    }

    #[test]
    fn test_single_space_is_not_a_double_space() {
        assert!(check_double_spaces("Hello , world", 1).is_empty());
        assert!(check_double_spaces("Hello\u{00A0}world", 1).is_empty());
    }

    #[test]
    fn test_double_space_matches_left_to_right() {
        let findings = check_double_spaces("ab  cd  ef", 2);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].suggestion.contains("“ab  cd”"));
        assert!(findings[1].suggestion.contains("“cd  ef”"));
    }

    #[test]
    fn test_flags_runs_around_single_char_word() {
        let findings = check_double_spaces("I  a  m", 1);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].suggestion, "Replace “I  a” with “I a”.");
        assert_eq!(findings[1].suggestion, "Replace “a  m” with “a m”.");

        assert_eq!(check_double_spaces("word  a  word", 1).len(), 2);
    }

    #[test]
    fn test_double_space_needs_text_on_both_sides() {
        assert!(check_double_spaces("  indented", 1).is_empty());
        assert!(check_double_spaces("trailing  ", 1).is_empty());
        assert!(check_double_spaces("   ", 1).is_empty());
    }

    #[test]
    fn test_flags_space_before_comma() {
        let findings = check_space_before_punctuation("Hello , world", 1);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].problem.contains("“,”"));
        assert_eq!(findings[0].suggestion, "Remove the space before “,”.");
    }

    #[test]
    fn test_flags_each_punctuation_mark() {
        for punct in [',', '.', ';', ':', '?', '!'] {
            let line = format!("word {}", punct);
            let findings = check_space_before_punctuation(&line, 1);
            assert_eq!(findings.len(), 1, "{}", punct);
            assert!(findings[0].problem.contains(punct));
        }
    }

    #[test]
    fn test_flags_many_spaces_after_punctuation() {
        let findings = check_spaces_after_punctuation("First.  Second;   third", 3);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].problem.contains("“.”"));
        assert!(findings[1].problem.contains("“;”"));
        assert!(check_spaces_after_punctuation("First. Second", 3).is_empty());
    }

    #[test]
    fn test_leading_spaces_excerpt_is_line_head() {
        let line = format!("   {}", "x".repeat(100));
        let findings = check_leading_spaces(&line, 1);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].sentence_or_excerpt.chars().count(), 80);
        assert!(findings[0].sentence_or_excerpt.starts_with("   x"));
        assert!(check_leading_spaces(" single", 1).is_empty());
    }

    #[test]
    fn test_trailing_spaces_excerpt_is_line_tail() {
        let line = format!("{}  ", "y".repeat(100));
        let findings = check_trailing_spaces(&line, 1);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].sentence_or_excerpt.chars().count(), 80);
        assert!(findings[0].sentence_or_excerpt.ends_with("y  "));
        assert!(check_trailing_spaces("single ", 1).is_empty());
    }

    #[test]
    fn test_after_punctuation_counts_mixed_runs() {
        let findings = check_spaces_after_punctuation("One,\t\u{00A0}two. \u{3000}three", 1);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].problem, "Multiple spaces after “,”.");
        assert_eq!(findings[1].problem, "Multiple spaces after “.”.");
    }

    #[test]
    fn test_leading_spaces_counts_mixed_runs() {
        assert_eq!(check_leading_spaces("\t\u{2003}Heading", 1).len(), 1);
        assert_eq!(check_leading_spaces(" \u{00A0}Heading", 1).len(), 1);
        assert!(check_leading_spaces("\u{2003}Heading", 1).is_empty());
    }

    #[test]
    fn test_trailing_spaces_counts_mixed_runs() {
        assert_eq!(check_trailing_spaces("Closing\u{202F}\t", 1).len(), 1);
        assert_eq!(check_trailing_spaces("Closing \u{3000}", 1).len(), 1);
        assert!(check_trailing_spaces("Closing\t", 1).is_empty());
    }

    #[test]
    fn test_overlapping_checks_are_all_reported() {
        let findings = check_line("  Hello,  world.  ", 1);
        let problems: Vec<&str> = findings.iter().map(|f| f.problem.as_str()).collect();
        assert!(problems.contains(&"Leading extra spaces at line start."));
        assert!(problems.contains(&"Multiple spaces after “,”."));
        assert!(problems.contains(&"Trailing extra spaces at line end."));
        assert!(findings.len() >= 3);
    }

    #[test]
    fn test_line_checks_run_in_fixed_order() {
        let findings = check_line("  a  b ,  ", 1);
        let problems: Vec<&str> = findings.iter().map(|f| f.problem.as_str()).collect();
        assert_eq!(
            problems,
            vec![
                "Multiple consecutive spaces between words.",
                "Space before punctuation “,”.",
                "Multiple spaces after “,”.",
                "Leading extra spaces at line start.",
                "Trailing extra spaces at line end.",
            ]
        );
    }

    #[test]
    fn test_empty_line_has_no_findings() {
        assert!(check_line("", 1).is_empty());
    }
}
