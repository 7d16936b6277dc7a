// src/core/boundary.rs
use crate::config::WordChars;

/// True if there is a word boundary at byte offset `at` of `text`:
/// the characters on either side differ in "word-ness", string edges
/// counting as non-word. Same rule as regex `\b`.
pub fn is_boundary(text: &str, at: usize, word_chars: WordChars) -> bool {
    let before = text[..at]
        .chars()
        .next_back()
        .is_some_and(|c| word_chars.is_word_char(c));
    let after = text[at..]
        .chars()
        .next()
        .is_some_and(|c| word_chars.is_word_char(c));
    before != after
}

/// Finds `needle` in `haystack` anchored by word boundaries on both ends,
/// the equivalent of testing `\b<escaped needle>\b`. Every occurrence is
/// tried, including overlapping ones. Comparison is exact; callers fold case.
pub fn contains_bounded(haystack: &str, needle: &str, word_chars: WordChars) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        if is_boundary(haystack, start, word_chars) && is_boundary(haystack, end, word_chars) {
            return true;
        }
        // step one char forward so overlapping occurrences are seen
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
