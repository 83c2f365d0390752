// tests/integration_tests/analysis_test.rs
use super::common::MEETING_NOTE;
use anyhow::Result;
use smartnote::{
    AnalysisOptions, NoteError, NoteFormat, Readability, Settings, analyze, count_syllables,
    extract_structure, readability, sentiment_indicators, summarize, word_frequency,
};

#[test]
fn test_meeting_note_analysis() -> Result<()> {
    let analysis = analyze(MEETING_NOTE, &AnalysisOptions::default())?;

    assert_eq!(analysis.top_words.first(), Some(&("release".to_owned(), 2)));
    assert!(analysis.top_words.len() <= 15);
    assert!(analysis.key_phrases.len() <= 8);
    assert!(
        analysis
            .key_phrases
            .contains(&("release planning".to_owned(), 1))
    );

    let stats = &analysis.readability;
    assert!(stats.sentence_count > 0);
    assert!((0.0..=100.0).contains(&stats.flesch_reading_ease));

    let sentiment = analysis.sentiment_indicators;
    assert_eq!(sentiment.positive_count, 1, "great");
    assert_eq!(sentiment.negative_count, 1, "broken");
    assert_eq!(sentiment.urgent_count, 2, "fix and deadline");
    Ok(())
}

#[test]
fn test_standalone_word_frequency_top_twenty() {
    let letters: Vec<String> = (b'a'..=b'z')
        .map(|c| String::from(char::from(c)).repeat(4))
        .collect();
    let ranked = word_frequency(&letters.join(" "), 3, 20, false);
    assert_eq!(ranked.len(), 20);
    assert_eq!(ranked.first(), Some(&("aaaa".to_owned(), 1)));
    assert_eq!(ranked.last(), Some(&("tttt".to_owned(), 1)));

    // Letters glued to digits are not words.
    assert!(word_frequency("abc123 v2 x11", 3, 20, false).is_empty());
}

#[test]
fn test_syllable_scenarios() {
    assert_eq!(count_syllables("cat"), 1);
    assert_eq!(count_syllables("hello"), 2);
    assert_eq!(count_syllables("tape"), 1);
}

#[test]
fn test_readability_of_empty_content() {
    assert_eq!(readability(""), Readability::default());
}

#[test]
fn test_sentiment_scenario() {
    let indicators = sentiment_indicators("This is great but the bug is urgent");
    assert_eq!(indicators.positive_count, 1);
    assert_eq!(indicators.negative_count, 1);
    assert_eq!(indicators.urgent_count, 1);
}

#[test]
fn test_invalid_options_leave_nothing_behind() {
    let options = AnalysisOptions {
        phrase_min_words: 3,
        phrase_max_words: 1,
        ..AnalysisOptions::default()
    };
    assert!(matches!(
        analyze(MEETING_NOTE, &options),
        Err(NoteError::InvalidOptions { .. })
    ));
}

#[test]
fn test_summary_of_meeting_note() -> Result<()> {
    let record = extract_structure(MEETING_NOTE, NoteFormat::Markdown)?;
    let digest = summarize(&record, &Settings::default().summary);
    let lines: Vec<&str> = digest.lines().collect();
    assert_eq!(lines.first().copied(), Some("Document type: markdown"));
    assert_eq!(lines.get(1).copied(), Some("Headers: 3 (H1: 1, H2: 2)"));
    assert!(lines.contains(&"Tags (1): comms"));
    assert!(lines.contains(&"Keywords (2): dana, launch checklist"));
    assert_eq!(lines.last().copied(), Some("TODOs: 1/5 completed"));
    Ok(())
}
