// src/core.rs
pub mod extract;
pub mod frequency;
pub mod insight;
pub mod lexicon;
pub mod readability;
pub mod sentiment;
pub mod summary;
pub mod text;
