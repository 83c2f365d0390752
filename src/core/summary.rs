// src/core/summary.rs
use crate::config::SummaryConfig;
use crate::models::StructuralRecord;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Renders a short multi-line digest of a structural record.
///
/// Lines appear in a fixed order: document type, header histogram, word and
/// line counts, tags, keywords, todo progress. Sections with nothing to show
/// are left out.
#[inline]
#[must_use]
pub fn summarize(record: &StructuralRecord, config: &SummaryConfig) -> String {
    let mut lines = vec![format!("Document type: {}", record.format)];

    if config.include_structure && !record.headers.is_empty() {
        let levels: Vec<String> = record
            .header_histogram()
            .iter()
            .zip(1_usize..)
            .filter(|(count, _)| **count > 0)
            .map(|(count, level)| format!("H{level}: {count}"))
            .collect();
        lines.push(format!(
            "Headers: {} ({})",
            record.headers.len(),
            levels.join(", ")
        ));
    }

    if config.include_word_count {
        lines.push(format!(
            "Content: {} words, {} lines",
            record.word_count(),
            record.line_count()
        ));
    }

    if !record.tags.is_empty() {
        lines.push(format!(
            "Tags ({}): {}",
            record.tags.len(),
            preview(&record.tags, config.max_tags_shown)
        ));
    }

    if !record.keywords.is_empty() {
        lines.push(format!(
            "Keywords ({}): {}",
            record.keywords.len(),
            preview(&record.keywords, config.max_keywords_shown)
        ));
    }

    if !record.todos.is_empty() {
        lines.push(format!(
            "TODOs: {}/{} completed",
            record.completed_todos(),
            record.todos.len()
        ));
    }

    lines.join("\n")
}

fn preview(items: &BTreeSet<String>, limit: usize) -> String {
    let mut shown = items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let hidden = items.len().saturating_sub(limit);
    if hidden > 0 {
        let _ = write!(shown, " (+{hidden} more)");
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::extract_structure;
    use crate::models::NoteFormat;
    use anyhow::Result;

    #[test]
    fn test_markdown_digest() -> Result<()> {
        let record = extract_structure(
            "# Plan\n## Tasks\n## Notes\n#a #b #c #d #e #f #g\n- [ ] next step\n- [x] fix index",
            NoteFormat::Markdown,
        )?;
        let digest = summarize(&record, &SummaryConfig::default());
        let lines: Vec<&str> = digest.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Document type: markdown",
                "Headers: 4 (H1: 2, H2: 2)",
                "Content: 22 words, 6 lines",
                "Tags (6): b, c, d, e, f (+1 more)",
                "TODOs: 2/2 completed",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_sections_can_be_disabled() -> Result<()> {
        let record = extract_structure("# Title\nbody @bob", NoteFormat::Markdown)?;
        let config = SummaryConfig {
            include_structure: false,
            include_word_count: false,
            ..SummaryConfig::default()
        };
        assert_eq!(
            summarize(&record, &config),
            "Document type: markdown\nKeywords (1): bob"
        );
        Ok(())
    }
}
