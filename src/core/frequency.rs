// src/core/frequency.rs
use crate::core::lexicon::is_stop_word;
use crate::core::text::{phrase_tokens, word_tokens};
use crate::models::Ranked;
use std::collections::HashMap;

/// Frequency count that remembers the order in which terms first appeared,
/// so ranking ties resolve deterministically.
#[derive(Debug, Default)]
pub struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, term: String) {
        if let Some(&position) = self.index.get(&term) {
            if let Some(entry) = self.entries.get_mut(position) {
                entry.1 = entry.1.saturating_add(1);
            }
        } else {
            self.index.insert(term.clone(), self.entries.len());
            self.entries.push((term, 1));
        }
    }

    /// The `top_n` most frequent terms; the stable sort keeps first-seen order on ties.
    #[inline]
    #[must_use]
    pub fn most_common(mut self, top_n: usize) -> Ranked {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(top_n);
        self.entries
    }
}

impl FromIterator<String> for OrderedCounter {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut counter = Self::new();
        for term in iter {
            counter.add(term);
        }
        counter
    }
}

/// Most frequent words of at least `min_length` letters.
#[inline]
#[must_use]
pub fn word_frequency(
    text: &str,
    min_length: usize,
    top_n: usize,
    include_stop_words: bool,
) -> Ranked {
    word_tokens(text, min_length)
        .into_iter()
        .filter(|word| include_stop_words || !is_stop_word(word))
        .collect::<OrderedCounter>()
        .most_common(top_n)
}

/// Most frequent contiguous runs of `min_words..=max_words` content words.
///
/// Stop words and tokens shorter than three characters are removed before
/// windows are formed, so a phrase may span a dropped word.
#[inline]
#[must_use]
pub fn key_phrases(text: &str, min_words: usize, max_words: usize, top_n: usize) -> Ranked {
    let words: Vec<String> = phrase_tokens(text)
        .into_iter()
        .filter(|word| !is_stop_word(word) && word.chars().count() >= 3)
        .collect();

    let mut counter = OrderedCounter::new();
    for n in min_words.max(1)..=max_words {
        for window in words.windows(n) {
            counter.add(window.join(" "));
        }
    }
    counter.most_common(top_n)
}
