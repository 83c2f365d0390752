// src/core/lexicon.rs
//! Fixed English word lists. Built once, never mutated.
use lazy_static::lazy_static;
use std::collections::HashSet;

const STOP_WORD_LIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "as",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "must", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "yourselves", "themselves",
];

const POSITIVE_LIST: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "love", "like",
    "enjoy", "happy", "pleased", "satisfied", "excited", "success", "successful", "achievement",
    "accomplish", "complete", "done",
];

const NEGATIVE_LIST: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "dislike", "angry", "upset", "frustrated",
    "annoyed", "disappointed", "fail", "failure", "problem", "issue", "bug", "error", "broken",
    "difficult", "hard", "challenging",
];

const URGENT_LIST: &[&str] = &[
    "urgent", "asap", "immediately", "critical", "important", "priority", "deadline", "due",
    "emergency", "fix", "resolve", "address",
];

lazy_static! {
    pub static ref STOP_WORDS: HashSet<&'static str> = STOP_WORD_LIST.iter().copied().collect();
    pub static ref POSITIVE_WORDS: HashSet<&'static str> = POSITIVE_LIST.iter().copied().collect();
    pub static ref NEGATIVE_WORDS: HashSet<&'static str> = NEGATIVE_LIST.iter().copied().collect();
    pub static ref URGENT_WORDS: HashSet<&'static str> = URGENT_LIST.iter().copied().collect();
}

#[inline]
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
