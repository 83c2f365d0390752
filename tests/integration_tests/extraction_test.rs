// tests/integration_tests/extraction_test.rs
use super::common::MEETING_NOTE;
use anyhow::Result;
use smartnote::{Extractor, NoteError, NoteFormat, Settings, extract_structure};

#[test]
fn test_meeting_note_structure() -> Result<()> {
    let record = extract_structure(MEETING_NOTE, NoteFormat::Markdown)?;

    let headers: Vec<(u8, &str)> = record
        .headers
        .iter()
        .map(|h| (h.level, h.title.as_str()))
        .collect();
    assert_eq!(
        headers,
        vec![(1, "Weekly sync"), (2, "Decisions"), (2, "Follow ups")]
    );

    assert!(record.tags.contains("comms"));
    assert!(record.keywords.contains("dana"));
    assert!(record.keywords.contains("launch checklist"));

    for todo in [
        "Email @dana about the [launch checklist]",
        "Book the room",
        "Draft the announcement #comms",
        "fix the flaky build before the deadline",
        "broken link in the docs",
    ] {
        assert!(record.todos.contains(todo), "missing todo: {todo}");
    }
    assert!(record.urls.contains("https://example.com/roadmap"));
    assert!(record.emails.is_empty(), "emails are off by default");
    Ok(())
}

#[test]
fn test_extraction_is_idempotent() -> Result<()> {
    let first = extract_structure(MEETING_NOTE, NoteFormat::Markdown)?;
    let second = extract_structure(MEETING_NOTE, NoteFormat::Markdown)?;
    assert_eq!(first.headers, second.headers);
    assert_eq!(first.tags, second.tags);
    assert_eq!(first.keywords, second.keywords);
    assert_eq!(first.todos, second.todos);
    assert_eq!(first.content, MEETING_NOTE);
    Ok(())
}

#[test]
fn test_text_format_rules() -> Result<()> {
    let record = extract_structure(MEETING_NOTE, NoteFormat::Text)?;
    assert!(record.headers.is_empty());
    assert!(record.keywords.is_empty());
    assert!(!record.todos.contains("Book the room"));
    assert!(record.todos.contains("fix the flaky build before the deadline"));
    // Every `#word` counts as a tag in plain text.
    assert!(record.tags.contains("comms"));
    Ok(())
}

#[test]
fn test_configured_todo_prefixes() -> Result<()> {
    let settings = Settings::merged_with(serde_json::json!({
        "parsing": { "custom_todo_patterns": ["HACK:"] }
    }))?;
    let extractor = Extractor::new(&settings.parsing)?;
    let record = extractor.extract("HACK: temporary shim\nTODO: ignored now", NoteFormat::Text)?;
    assert_eq!(record.todos.len(), 1);
    assert!(record.todos.contains("temporary shim"));
    Ok(())
}

#[test]
fn test_blank_note_is_rejected() {
    assert!(matches!(
        extract_structure("\n\t\n", NoteFormat::Text),
        Err(NoteError::EmptyInput)
    ));
}
