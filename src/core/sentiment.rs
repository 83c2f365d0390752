// src/core/sentiment.rs
use crate::core::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS, URGENT_WORDS};
use crate::core::text::word_runs;
use crate::models::SentimentIndicators;

/// Tallies whole-word, case-insensitive hits against the fixed lexicons.
///
/// These are raw counts only; no polarity is inferred from them.
#[inline]
#[must_use]
pub fn sentiment_indicators(text: &str) -> SentimentIndicators {
    let mut indicators = SentimentIndicators::default();
    for word in word_runs(text) {
        let word = word.to_lowercase();
        let word = word.as_str();
        if POSITIVE_WORDS.contains(word) {
            indicators.positive_count = indicators.positive_count.saturating_add(1);
        }
        if NEGATIVE_WORDS.contains(word) {
            indicators.negative_count = indicators.negative_count.saturating_add(1);
        }
        if URGENT_WORDS.contains(word) {
            indicators.urgent_count = indicators.urgent_count.saturating_add(1);
        }
    }
    indicators
}
