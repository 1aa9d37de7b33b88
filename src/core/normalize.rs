//! Comparison keys for free-text fields (event types, performer names).

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decompose, drop combining marks, lower-case and fold `đ` to `d`.
///
/// `"ĐÊM NHẠC"` and `"dem nhac"` map to the same key.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'đ' { 'd' } else { c })
        .collect()
}

/// `normalize` with all whitespace removed, for substring containment.
pub fn compact(text: &str) -> String {
    normalize(text).chars().filter(|c| !c.is_whitespace()).collect()
}

/// Case, diacritic and spacing insensitive containment.
pub fn contains(haystack: &str, needle: &str) -> bool {
    let needle = compact(needle);
    !needle.is_empty() && compact(haystack).contains(&needle)
}
