// src/models.rs
mod analysis;
mod document;
mod structure;

pub use analysis::{AnalysisOptions, AnalysisRecord, Ranked, Readability, SentimentIndicators};
pub use document::NoteFormat;
pub use structure::{Header, StructuralRecord};
