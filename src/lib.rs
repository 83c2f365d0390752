// src/lib.rs
//! Extracts headers, tags, keywords and todos from markdown and plain-text
//! notes, and derives word, phrase, readability and sentiment metrics.
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod ignore;
pub mod logging;
pub mod models;
pub mod scanner;
pub mod utils;
pub mod watch;

pub use cli::{Args, run};
pub use config::Settings;
pub use crate::core::extract::{Extractor, extract_structure};
pub use crate::core::frequency::{key_phrases, word_frequency};
pub use crate::core::insight::analyze;
pub use crate::core::readability::{count_syllables, readability};
pub use crate::core::sentiment::sentiment_indicators;
pub use crate::core::summary::summarize;
pub use error::{NoteError, NoteResult};
pub use export::{ExportFormat, NoteReport};
pub use models::{
    AnalysisOptions, AnalysisRecord, Header, NoteFormat, Readability, SentimentIndicators,
    StructuralRecord,
};
pub use scanner::{NoteProcessor, find_notes, scan_directory};
