// src/core/insight.rs
use crate::core::frequency::{key_phrases, word_frequency};
use crate::core::readability::readability;
use crate::core::sentiment::sentiment_indicators;
use crate::error::{NoteResult, ensure_content};
use crate::models::{AnalysisOptions, AnalysisRecord};
use tracing::debug;

/// Runs every text analyzer over `text` and bundles the results.
///
/// Options are validated before any work starts, so a failure never leaves
/// a half-built record behind.
///
/// # Errors
///
/// Returns [`crate::NoteError::EmptyInput`] for blank text and
/// [`crate::NoteError::InvalidOptions`] for out-of-range options.
#[inline]
pub fn analyze(text: &str, options: &AnalysisOptions) -> NoteResult<AnalysisRecord> {
    ensure_content(text)?;
    options.validate()?;

    let record = AnalysisRecord {
        top_words: word_frequency(
            text,
            options.min_word_length,
            options.top_words,
            options.include_stop_words,
        ),
        key_phrases: key_phrases(
            text,
            options.phrase_min_words,
            options.phrase_max_words,
            options.top_phrases,
        ),
        readability: readability(text),
        sentiment_indicators: sentiment_indicators(text),
    };

    debug!(
        top_words = record.top_words.len(),
        key_phrases = record.key_phrases.len(),
        flesch = record.readability.flesch_reading_ease,
        "analyzed note text"
    );
    Ok(record)
}
