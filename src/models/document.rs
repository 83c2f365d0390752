// src/models/document.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// How a note's markup is interpreted during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFormat {
    Markdown,
    Text,
}

impl NoteFormat {
    /// Detects the format from a file extension; only `.md` and `.markdown` are markdown.
    #[inline]
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_markdown = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown")
            });
        if is_markdown {
            Self::Markdown
        } else {
            Self::Text
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
