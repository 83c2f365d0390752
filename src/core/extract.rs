// src/core/extract.rs
use crate::config::ParsingConfig;
use crate::error::{NoteError, NoteResult, ensure_content};
use crate::models::{Header, NoteFormat, StructuralRecord};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

const MAX_HEADER_LEVEL: usize = 6;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"#(\w+)").unwrap();
    static ref MENTION: Regex = Regex::new(r"@(\w+)").unwrap();
    static ref BRACKET: Regex = Regex::new(r"\[([^\[\]]+)\]").unwrap();
    static ref CHECKBOX_MARKER: Regex = Regex::new(r"^\s*[-*+]\s+\[[ xX]\]").unwrap();
    static ref DASH_CHECKBOX: Regex = Regex::new(r"- \[[ x]\] (.+)").unwrap();
    static ref STAR_CHECKBOX: Regex = Regex::new(r"\* \[ \] (.+)").unwrap();
    static ref URL: Regex = Regex::new(r#"https?://[^\s<>()\[\]"']+"#).unwrap();
    static ref EMAIL: Regex = Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").unwrap();
}

/// Pattern-based extraction of headers, tags, keywords and todos.
///
/// Built once from the parsing config; custom patterns are compiled up front
/// so a bad pattern fails before any note is touched.
#[derive(Debug, Clone)]
pub struct Extractor {
    todo_prefix: Option<Regex>,
    custom_tags: Vec<Regex>,
    max_tag_length: usize,
    extract_urls: bool,
    extract_emails: bool,
}

impl Extractor {
    /// # Errors
    ///
    /// Returns [`NoteError::InvalidPattern`] if a custom tag pattern or todo
    /// prefix does not compile.
    #[inline]
    pub fn new(config: &ParsingConfig) -> NoteResult<Self> {
        let todo_prefix = todo_prefix_regex(&config.custom_todo_patterns, config.ignore_case)?;
        let custom_tags = config
            .custom_tag_patterns
            .iter()
            .map(String::as_str)
            .map(compile)
            .collect::<NoteResult<Vec<_>>>()?;

        Ok(Self {
            todo_prefix,
            custom_tags,
            max_tag_length: config.max_tag_length,
            extract_urls: config.extract_urls,
            extract_emails: config.extract_emails,
        })
    }

    /// Extracts the structural record for one note.
    ///
    /// Malformed markup never fails; it simply produces no match.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::EmptyInput`] when `content` is blank.
    #[inline]
    pub fn extract(&self, content: &str, format: NoteFormat) -> NoteResult<StructuralRecord> {
        ensure_content(content)?;

        let mut record = StructuralRecord::new(format, content);
        let is_markdown = format == NoteFormat::Markdown;

        for line in content.lines() {
            let tag_scope = if is_markdown {
                if let Some(header) = parse_header(line) {
                    record.headers.push(header);
                }
                strip_header_marker(line)
            } else {
                line
            };
            self.collect_tags(tag_scope, &mut record.tags);

            if is_markdown {
                collect_keywords(line, &mut record.keywords);
                collect_captures(&DASH_CHECKBOX, line, &mut record.todos);
                collect_captures(&STAR_CHECKBOX, line, &mut record.todos);
            }
            if let Some(prefix) = &self.todo_prefix {
                collect_captures(prefix, line, &mut record.todos);
            }
        }

        for pattern in &self.custom_tags {
            for caps in pattern.captures_iter(content) {
                let matched = caps.get(1).or_else(|| caps.get(0));
                if let Some(tag) = matched.map(|m| m.as_str().trim()) {
                    self.insert_tag(tag, &mut record.tags);
                }
            }
        }

        if self.extract_urls {
            record.urls = URL
                .find_iter(content)
                .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']))
                .map(str::to_owned)
                .collect();
        }
        if self.extract_emails {
            record.emails = EMAIL
                .find_iter(content)
                .map(|m| m.as_str().trim_end_matches('.').to_owned())
                .collect();
        }

        debug!(
            format = %format,
            headers = record.headers.len(),
            tags = record.tags.len(),
            keywords = record.keywords.len(),
            todos = record.todos.len(),
            "extracted note structure"
        );
        Ok(record)
    }

    fn collect_tags(&self, text: &str, tags: &mut BTreeSet<String>) {
        for caps in TAG.captures_iter(text) {
            if let Some(tag) = caps.get(1) {
                self.insert_tag(tag.as_str(), tags);
            }
        }
    }

    fn insert_tag(&self, tag: &str, tags: &mut BTreeSet<String>) {
        if tag.is_empty() {
            return;
        }
        if self.max_tag_length > 0 && tag.chars().count() > self.max_tag_length {
            return;
        }
        tags.insert(tag.to_owned());
    }
}

impl Default for Extractor {
    fn default() -> Self {
        let config = ParsingConfig::default();
        Self {
            todo_prefix: todo_prefix_regex(&config.custom_todo_patterns, config.ignore_case)
                .ok()
                .flatten(),
            custom_tags: Vec::new(),
            max_tag_length: config.max_tag_length,
            extract_urls: config.extract_urls,
            extract_emails: config.extract_emails,
        }
    }
}

/// Extracts structure with the default parsing rules.
///
/// # Errors
///
/// Returns [`NoteError::EmptyInput`] when `content` is blank.
#[inline]
pub fn extract_structure(content: &str, format: NoteFormat) -> NoteResult<StructuralRecord> {
    Extractor::default().extract(content, format)
}

/// A line opening with 1 to 6 `#` followed by text is a header.
///
/// The space after the marker is optional, so `#Title` is a header too.
fn parse_header(line: &str) -> Option<Header> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > MAX_HEADER_LEVEL {
        return None;
    }
    let title = line.get(level..)?.trim();
    if title.is_empty() {
        return None;
    }
    Some(Header {
        level: u8::try_from(level).ok()?,
        title: title.to_owned(),
    })
}

/// Drops up to six leading `#` so a header marker is never read as a tag.
fn strip_header_marker(line: &str) -> &str {
    let marker = line
        .chars()
        .take(MAX_HEADER_LEVEL)
        .take_while(|&c| c == '#')
        .count();
    line.get(marker..).unwrap_or(line)
}

fn collect_keywords(line: &str, keywords: &mut BTreeSet<String>) {
    for caps in MENTION.captures_iter(line) {
        if let Some(mention) = caps.get(1) {
            keywords.insert(mention.as_str().to_owned());
        }
    }

    let body = CHECKBOX_MARKER
        .find(line)
        .map_or(line, |marker| line.get(marker.end()..).unwrap_or(line));
    for caps in BRACKET.captures_iter(body) {
        if let Some(term) = caps.get(1).map(|m| m.as_str().trim()) {
            if !term.is_empty() {
                keywords.insert(term.to_owned());
            }
        }
    }
}

fn collect_captures(pattern: &Regex, line: &str, into: &mut BTreeSet<String>) {
    for caps in pattern.captures_iter(line) {
        if let Some(text) = caps.get(1).map(|m| m.as_str().trim()) {
            if !text.is_empty() {
                into.insert(text.to_owned());
            }
        }
    }
}

/// Builds one alternation out of the configured todo prefixes.
///
/// `TODO` accepts an optional colon; every other prefix is matched as written.
fn todo_prefix_regex(prefixes: &[String], ignore_case: bool) -> NoteResult<Option<Regex>> {
    let alternatives: Vec<String> = prefixes
        .iter()
        .map(|prefix| prefix.trim())
        .filter(|prefix| !prefix.is_empty())
        .map(|prefix| {
            let stem = prefix.strip_suffix(':').unwrap_or(prefix);
            let has_colon = stem.len() != prefix.len();
            let mut alternative = String::new();
            if stem.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
                alternative.push_str(r"\b");
            }
            alternative.push_str(&regex::escape(stem));
            if stem.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
                alternative.push_str(r"\b");
            }
            if stem.eq_ignore_ascii_case("todo") {
                alternative.push_str(":?");
            } else if has_colon {
                alternative.push(':');
            }
            alternative
        })
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let flags = if ignore_case { "(?i)" } else { "" };
    let pattern = format!(r"{flags}(?:{})[ \t]*(.+)", alternatives.join("|"));
    compile(&pattern).map(Some)
}

fn compile(pattern: &str) -> NoteResult<Regex> {
    Regex::new(pattern).map_err(|source| NoteError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}
