//! Character-level classification for mixed Chinese/Latin text.

/// UTF-8 width of a hanzi in the Basic Multilingual Plane.
pub const HANZI_UTF8_WIDTH: usize = 3;

/// UTF-8 width of a hanzi in the supplementary ideographic planes.
pub const HANZI_UTF8_WIDTH_SUPPLEMENTARY: usize = 4;

/// CJK Unified Ideographs plus Extension A and the Extension B..F range.
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2EBEF}').contains(&c)
}

/// A character that may belong to a passthrough run: ASCII letters and the
/// apostrophe.
pub fn is_latin_run_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

/// The whole string is ASCII letters and apostrophes. The empty string
/// qualifies, matching the behaviour of a `^[A-Za-z']*$` pattern.
pub fn is_latin_run(s: &str) -> bool {
    s.chars().all(is_latin_run_char)
}

/// Empty after trimming surrounding whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// The sole `char` of `s` if `s` occupies exactly the storage of one Chinese
/// code point: any 3-byte character, or a 4-byte one only when it lies in
/// the supplementary hanzi planes.
pub fn single_hanzi_width_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => match c.len_utf8() {
            HANZI_UTF8_WIDTH => Some(c),
            HANZI_UTF8_WIDTH_SUPPLEMENTARY if is_hanzi(c) => Some(c),
            _ => None,
        },
        _ => None,
    }
}
