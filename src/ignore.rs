// src/ignore.rs
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Component, Path};

pub const IGNORE_FILE_NAME: &str = ".noteignore";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    pattern: Pattern,
    negated: bool,
    directory_only: bool,
    /// Anchored rules match the whole path relative to the scan root;
    /// the rest match a single file or directory name at any depth.
    anchored: bool,
}

/// Gitignore-style rules read from a `.noteignore` file. The last matching rule wins.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    rules: Vec<Rule>,
}

impl IgnoreRules {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one line of ignore syntax. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Fails if the line is not a valid glob.
    #[inline]
    pub fn add_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (negated, line) = line
            .strip_prefix('!')
            .map_or((false, line), |rest| (true, rest));
        let (directory_only, line) = line
            .strip_suffix('/')
            .map_or((false, line), |rest| (true, rest));
        let (leading_slash, line) = line
            .strip_prefix('/')
            .map_or((false, line), |rest| (true, rest));
        if line.is_empty() {
            return Ok(());
        }

        let pattern =
            Pattern::new(line).with_context(|| format!("Invalid ignore pattern: {line}"))?;
        self.rules.push(Rule {
            pattern,
            negated,
            directory_only,
            anchored: leading_slash || line.contains('/'),
        });
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether `relative` (a path below the scan root) is ignored.
    #[inline]
    #[must_use]
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        let normalized = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        let name = relative
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let mut ignored = false;
        for rule in &self.rules {
            if rule.directory_only && !is_dir {
                continue;
            }
            let subject = if rule.anchored { normalized.as_str() } else { name };
            if rule.pattern.matches_with(subject, MATCH_OPTIONS) {
                ignored = !rule.negated;
            }
        }
        ignored
    }

    /// Whether the file at `relative`, or any directory above it, is ignored.
    #[inline]
    #[must_use]
    pub fn is_file_excluded(&self, relative: &Path) -> bool {
        relative
            .ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
            .any(|dir| self.is_ignored(dir, true))
            || self.is_ignored(relative, false)
    }
}

/// Loads `.noteignore` from `dir`, or from the nearest ancestor that has one.
///
/// # Errors
///
/// Fails if the ignore file exists but cannot be read or holds an invalid glob.
#[inline]
pub fn load_ignore_rules(dir: &Path) -> Result<IgnoreRules> {
    let mut rules = IgnoreRules::new();

    let Some(ignore_file) = dir
        .ancestors()
        .map(|ancestor| ancestor.join(IGNORE_FILE_NAME))
        .find(|candidate| candidate.is_file())
    else {
        return Ok(rules);
    };

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read ignore file: {}", ignore_file.display()))?;
    for line in content.lines() {
        rules.add_line(line)?;
    }
    Ok(rules)
}
