// src/utils.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extensions treated as notes when scanning or watching a directory.
pub const NOTE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Reads a note as UTF-8, falling back to Latin-1 for anything else.
///
/// # Errors
///
/// Fails if the file does not exist or cannot be read.
#[inline]
pub fn read_note(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read note: {}", path.display()))?;
    Ok(decode_text(bytes, path))
}

fn decode_text(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("{} is not UTF-8, decoding as Latin-1", path.display());
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

#[inline]
#[must_use]
pub fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            NOTE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[inline]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_name().to_str().is_some_and(|s| {
            // Don't consider temp directories as hidden
            if s.starts_with(".tmp") {
                return false;
            }
            s.starts_with('.')
        })
}

/// Path-based twin of [`is_hidden`] for paths relative to a watched root.
#[inline]
#[must_use]
pub fn is_hidden_path(relative: &Path) -> bool {
    relative.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|s| s.starts_with('.') && !s.starts_with(".tmp") && s != "." && s != "..")
    })
}
