// Excerpt extraction for findings
//
// Offsets are byte offsets (as returned by `regex`), padding counts characters.

/// Context characters kept on each side of a match
pub const DEFAULT_PAD: usize = 40;

/// Marker appended by [`truncate`]
pub const ELLIPSIS: char = '…';

/// Returns `text` from `pad` characters before `start` to `pad` characters
/// after `end`, clipped to the string. Never panics: offsets past the end or
/// inside a multi-byte character are clamped to a character boundary.
pub fn excerpt(text: &str, start: usize, end: usize, pad: usize) -> String {
    let start = floor_boundary(text, start);
    let end = floor_boundary(text, end).max(start);

    let from = text[..start]
        .char_indices()
        .rev()
        .take(pad)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(pad)
        .map_or(text.len(), |(i, _)| end + i);

    text[from..to].to_string()
}

/// Trims `text` and caps it at `limit` characters, marking the cut with `…`
pub fn truncate(text: &str, limit: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= limit {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(limit).collect();
    out.push(ELLIPSIS);
    out
}

/// First `n` characters of a line
pub fn head_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((i, _)) => &line[..i],
        None => line,
    }
}

/// Last `n` characters of a line
pub fn tail_chars(line: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match line.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &line[i..],
        None => line,
    }
}

fn floor_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_clamps_to_short_text() {
        assert_eq!(excerpt("ab", 0, 2, 40), "ab");
        assert_eq!(excerpt("ab", 0, 2, DEFAULT_PAD), "ab");
    }

    #[test]
    fn test_excerpt_pads_both_sides() {
        let text = "0123456789abcdefghij";
        assert_eq!(excerpt(text, 10, 11, 3), "789abcd");
        assert_eq!(excerpt(text, 10, 11, 0), "a");
    }

    #[test]
    fn test_excerpt_out_of_range_offsets() {
        assert_eq!(excerpt("hello", 50, 80, 2), "lo");
        assert_eq!(excerpt("hello", 3, 1, 1), "ll");
        assert_eq!(excerpt("", 0, 10, 40), "");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "ééé\u{00A0}ééé";
        let start = text.find('\u{00A0}').unwrap();
        let end = start + '\u{00A0}'.len_utf8();
        assert_eq!(excerpt(text, start, end, 2), "éé\u{00A0}éé");
        // offset inside a multi-byte char is clamped, not a panic
        assert_eq!(excerpt(text, 1, 1, 0), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("  short  ", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_head_and_tail_chars() {
        assert_eq!(head_chars("abcdef", 3), "abc");
        assert_eq!(head_chars("ab", 80), "ab");
        assert_eq!(tail_chars("abcdef", 3), "def");
        assert_eq!(tail_chars("ab", 80), "ab");
        assert_eq!(tail_chars("ab", 0), "");
    }
}
