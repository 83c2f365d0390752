// src/models/structure.rs
use crate::models::{AnalysisRecord, NoteFormat};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub level: u8,
    pub title: String,
}

/// Everything pattern extraction finds in one note.
///
/// Sets are kept as `BTreeSet` so digests and exports list entries in a
/// stable order; nothing relies on that order beyond presentation.
#[derive(Debug, Clone, Serialize)]
pub struct StructuralRecord {
    pub format: NoteFormat,
    pub headers: Vec<Header>,
    pub tags: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    pub todos: BTreeSet<String>,
    pub urls: BTreeSet<String>,
    pub emails: BTreeSet<String>,
    #[serde(skip)]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisRecord>,
}

impl StructuralRecord {
    #[inline]
    #[must_use]
    pub fn new(format: NoteFormat, content: &str) -> Self {
        Self {
            format,
            headers: Vec::new(),
            tags: BTreeSet::new(),
            keywords: BTreeSet::new(),
            todos: BTreeSet::new(),
            urls: BTreeSet::new(),
            emails: BTreeSet::new(),
            content: content.to_owned(),
            analysis: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Todos whose text contains an `x`, the heuristic used for "completed".
    #[inline]
    #[must_use]
    pub fn completed_todos(&self) -> usize {
        self.todos.iter().filter(|todo| todo.contains('x')).count()
    }

    /// Counts headers per level, indexed `0..6` for levels 1 to 6.
    #[inline]
    #[must_use]
    pub fn header_histogram(&self) -> [usize; 6] {
        let mut histogram = [0_usize; 6];
        for header in &self.headers {
            let index = usize::from(header.level.clamp(1, 6)).saturating_sub(1);
            if let Some(slot) = histogram.get_mut(index) {
                *slot = slot.saturating_add(1);
            }
        }
        histogram
    }
}
