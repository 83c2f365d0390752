// src/models/analysis.rs
use crate::error::{NoteError, NoteResult};
use serde::{Deserialize, Serialize};

/// `(term, count)` pairs ordered by descending count, ties in first-seen order.
pub type Ranked = Vec<(String, usize)>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Readability {
    pub sentence_count: usize,
    pub word_count: usize,
    pub syllable_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
    pub flesch_reading_ease: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentIndicators {
    pub positive_count: usize,
    pub negative_count: usize,
    pub urgent_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub top_words: Ranked,
    pub key_phrases: Ranked,
    pub readability: Readability,
    pub sentiment_indicators: SentimentIndicators,
}

/// Tuning knobs for [`crate::analyze`]; also the `analysis` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub min_word_length: usize,
    pub top_words: usize,
    pub phrase_min_words: usize,
    pub phrase_max_words: usize,
    pub top_phrases: usize,
    pub include_stop_words: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            top_words: 15,
            phrase_min_words: 2,
            phrase_max_words: 4,
            top_phrases: 8,
            include_stop_words: false,
        }
    }
}

impl AnalysisOptions {
    /// # Errors
    ///
    /// Returns [`NoteError::InvalidOptions`] when a length or phrase bound is
    /// zero, or the phrase range is inverted.
    #[inline]
    pub fn validate(&self) -> NoteResult<()> {
        if self.min_word_length == 0 {
            return Err(invalid("min_word_length must be at least 1"));
        }
        if self.phrase_min_words == 0 {
            return Err(invalid("phrase_min_words must be at least 1"));
        }
        if self.phrase_max_words < self.phrase_min_words {
            return Err(invalid(
                "phrase_max_words must not be smaller than phrase_min_words",
            ));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> NoteError {
    NoteError::InvalidOptions {
        reason: reason.to_owned(),
    }
}
