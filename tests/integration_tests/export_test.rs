// tests/integration_tests/export_test.rs
use super::common::{MEETING_NOTE, create_test_file};
use anyhow::Result;
use smartnote::config::ExportConfig;
use smartnote::export::export_to_path;
use smartnote::{ExportFormat, NoteProcessor, Settings};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_json_export_with_analysis() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let note = create_test_file(temp_dir.path(), "meeting.md", MEETING_NOTE)?;
    let processor = NoteProcessor::new(&Settings::default(), true)?;
    let report = processor.process_file(&note)?;

    let output = temp_dir.path().join("out.json");
    export_to_path(&output, ExportFormat::Json, &[report], &ExportConfig::default())?;

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(value["format"], "markdown");
    assert_eq!(value["headers"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["analysis"]["top_words"][0][0], "release");
    assert_eq!(value["analysis"]["top_words"][0][1], 2);
    assert!(value["analysis"]["readability"]["flesch_reading_ease"].is_number());
    assert_eq!(value["analysis"]["sentiment_indicators"]["urgent_count"], 2);
    Ok(())
}

#[test]
fn test_csv_export_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let note = create_test_file(temp_dir.path(), "meeting.md", MEETING_NOTE)?;
    let processor = NoteProcessor::new(&Settings::default(), false)?;
    let report = processor.process_file(&note)?;

    let output = temp_dir.path().join("out.csv");
    export_to_path(&output, ExportFormat::Csv, &[report], &ExportConfig::default())?;

    let text = fs::read_to_string(&output)?;
    let kinds: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').nth(1))
        .collect();
    assert_eq!(kinds.first().copied(), Some("document_info"));
    assert_eq!(kinds.iter().filter(|k| **k == "header").count(), 3);
    assert_eq!(kinds.iter().filter(|k| **k == "tag").count(), 1);
    assert_eq!(kinds.iter().filter(|k| **k == "keyword").count(), 2);
    assert_eq!(kinds.iter().filter(|k| **k == "todo").count(), 5);
    Ok(())
}
