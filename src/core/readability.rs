// src/core/readability.rs
use crate::core::text::{sentence_split, word_runs};
use crate::models::Readability;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Estimates syllables by counting vowel groups.
///
/// Words of three characters or fewer are one syllable. A trailing `e` is
/// treated as silent. The estimate never drops below one.
#[inline]
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let mut count: usize = 0;
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_was_vowel {
            count = count.saturating_add(1);
        }
        prev_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

/// Sentence, word and syllable statistics with a Flesch Reading Ease score.
///
/// Text without any sentence or word yields an all-zero record.
#[inline]
#[must_use]
#[allow(clippy::as_conversions, clippy::cast_precision_loss)]
pub fn readability(text: &str) -> Readability {
    let sentence_count = sentence_split(text).len();
    let words: Vec<&str> = word_runs(text).collect();
    if sentence_count == 0 || words.is_empty() {
        return Readability::default();
    }

    let word_count = words.len();
    let syllable_count: usize = words.iter().map(|word| count_syllables(word)).sum();

    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / word_count as f64;
    let flesch = 206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word;

    Readability {
        sentence_count,
        word_count,
        syllable_count,
        avg_words_per_sentence: round_to(avg_words_per_sentence, 2),
        avg_syllables_per_word: round_to(avg_syllables_per_word, 2),
        flesch_reading_ease: round_to(flesch.clamp(0.0, 100.0), 1),
    }
}

/// Rounds on the exact binary value, ties to even.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
