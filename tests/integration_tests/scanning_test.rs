// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use smartnote::{NoteProcessor, Settings, find_notes, scan_directory};
use std::path::Path;

fn file_names(paths: &[impl AsRef<Path>]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.as_ref().file_name().and_then(|n| n.to_str()).map(str::to_owned))
        .collect()
}

#[test]
fn test_find_notes_filters_extensions_and_hidden() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let notes = find_notes(temp_dir.path())?;
    assert_eq!(
        file_names(&notes),
        vec!["old.md", "blank.md", "groceries.txt", "day1.markdown", "meeting.md"]
    );
    Ok(())
}

#[test]
fn test_noteignore_prunes_directories() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), ".noteignore", "archive/\n*.txt\n")?;

    let notes = find_notes(temp_dir.path())?;
    assert_eq!(
        file_names(&notes),
        vec!["blank.md", "day1.markdown", "meeting.md"]
    );
    Ok(())
}

#[test]
fn test_scan_directory_with_analysis() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let processor = NoteProcessor::new(&Settings::default(), true)?;
    let outcome = scan_directory(temp_dir.path(), &processor)?;

    assert_eq!(outcome.reports.len(), 4);
    assert_eq!(outcome.failures.len(), 1, "blank.md has no content");
    assert!(
        outcome
            .reports
            .iter()
            .all(|report| report.record.analysis.is_some())
    );

    let groceries = outcome
        .reports
        .iter()
        .find(|report| report.path.ends_with("groceries.txt"))
        .ok_or_else(|| anyhow::anyhow!("groceries.txt was not parsed"))?;
    assert!(groceries.record.tags.contains("errands"));
    assert_eq!(groceries.record.todos.len(), 1);
    Ok(())
}
