//! Space character set and compiled spacing patterns
//!
//! Every pattern is built from the same space class so that the checks agree
//! on what counts as a space.

use lazy_static::lazy_static;
use regex::Regex;

/// Non-ASCII code points treated as spaces
pub const UNICODE_SPACES: &[char] = &[
    '\u{00A0}', // no-break space
    '\u{1680}', // ogham space mark
    '\u{2000}', // en quad
    '\u{2001}', // em quad
    '\u{2002}', // en space
    '\u{2003}', // em space
    '\u{2004}', // three-per-em space
    '\u{2005}', // four-per-em space
    '\u{2006}', // six-per-em space
    '\u{2007}', // figure space
    '\u{2008}', // punctuation space
    '\u{2009}', // thin space
    '\u{200A}', // hair space
    '\u{202F}', // narrow no-break space
    '\u{205F}', // medium mathematical space
    '\u{3000}', // ideographic space
];

/// Punctuation checked for surrounding spaces
pub const SPACED_PUNCTUATION: &[char] = &[',', '.', ';', ':', '?', '!'];

/// Class body for the Unicode spaces, shared by every pattern below
const UNICODE_SPACE_CHARS: &str = r"\x{00A0}\x{1680}\x{2000}-\x{200A}\x{202F}\x{205F}\x{3000}";

/// Regex class matching ASCII space, tab and the Unicode spaces
pub fn space_class() -> String {
    format!(r"[ \t{}]", UNICODE_SPACE_CHARS)
}

lazy_static! {
    /// ␠␠: a run of two or more spaces; flanks are checked by the caller
    pub static ref SPACE_RUN: Regex =
        Regex::new(&format!(r"{}{{2,}}", space_class())).unwrap();

    /// ␠, : spaces directly before punctuation
    pub static ref SPACE_BEFORE_PUNCT: Regex =
        Regex::new(&format!(r"{}+([,.;:?!])", space_class())).unwrap();

    /// ,␠␠ : two or more spaces after punctuation
    pub static ref MANY_AFTER_PUNCT: Regex =
        Regex::new(&format!(r"([,.;:?!]){}{{2,}}", space_class())).unwrap();

    /// Two or more spaces at line start
    pub static ref LEADING_SPACES: Regex =
        Regex::new(&format!(r"^{}{{2,}}", space_class())).unwrap();

    /// Two or more spaces at line end
    pub static ref TRAILING_SPACES: Regex =
        Regex::new(&format!(r"{}{{2,}}$", space_class())).unwrap();

    /// Any single Unicode space
    pub static ref UNICODE_SPACE: Regex =
        Regex::new(&format!(r"[{}]", UNICODE_SPACE_CHARS)).unwrap();
}

pub fn is_unicode_space(c: char) -> bool {
    UNICODE_SPACES.contains(&c)
}

/// Human-readable name for a recognized Unicode space
pub fn unicode_space_name(c: char) -> &'static str {
    match c {
        '\u{00A0}' => "no-break space",
        '\u{1680}' => "ogham space mark",
        '\u{2000}' => "en quad",
        '\u{2001}' => "em quad",
        '\u{2002}' => "en space",
        '\u{2003}' => "em space",
        '\u{2004}' => "three-per-em space",
        '\u{2005}' => "four-per-em space",
        '\u{2006}' => "six-per-em space",
        '\u{2007}' => "figure space",
        '\u{2008}' => "punctuation space",
        '\u{2009}' => "thin space",
        '\u{200A}' => "hair space",
        '\u{202F}' => "narrow no-break space",
        '\u{205F}' => "medium mathematical space",
        '\u{3000}' => "ideographic space",
        _ => "space",
    }
}
