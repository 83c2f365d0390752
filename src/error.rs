// src/error.rs
use thiserror::Error;

/// Data-validation failures raised by the extraction and analysis core.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("note content is empty")]
    EmptyInput,
    #[error("invalid analysis options: {reason}")]
    InvalidOptions { reason: String },
    #[error("invalid custom pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type NoteResult<T> = Result<T, NoteError>;

/// Rejects content that is empty or whitespace-only.
///
/// # Errors
///
/// Returns [`NoteError::EmptyInput`] when `content` has no visible characters.
#[inline]
pub fn ensure_content(content: &str) -> NoteResult<()> {
    if content.trim().is_empty() {
        return Err(NoteError::EmptyInput);
    }
    Ok(())
}
