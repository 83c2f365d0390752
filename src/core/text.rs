// src/core/text.rs
//! Tokenizing primitives shared by the analyzers. Every function is pure.

/// Matches the regex `\w` class: alphanumerics plus underscore.
#[inline]
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Maximal runs of word characters, in document order, case preserved.
pub fn word_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
}

/// Lowercased words made only of ASCII letters and at least `min_length` long.
///
/// A run of letters glued to digits or underscores (`abc123`) is not a word.
#[inline]
#[must_use]
pub fn word_tokens(text: &str, min_length: usize) -> Vec<String> {
    word_runs(text)
        .filter(|run| run.chars().all(|c| c.is_ascii_alphabetic()) && run.len() >= min_length)
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Splits on runs of `.`, `!` and `?`, trimming and dropping empty pieces.
#[inline]
#[must_use]
pub fn sentence_split(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Punctuation becomes whitespace, then the lowercased text is split on whitespace.
#[inline]
#[must_use]
pub fn phrase_tokens(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}
