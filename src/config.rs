// src/config.rs
use crate::export::ExportFormat;
use crate::models::AnalysisOptions;
use anyhow::{Context as _, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File names probed, in order, in the working directory and then the home directory.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".smartnote.toml",
    ".smartnote.yaml",
    ".smartnote.yml",
    ".smartnote.json",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    pub ignore_case: bool,
    /// Tags longer than this many characters are dropped; 0 disables the limit.
    pub max_tag_length: usize,
    pub custom_tag_patterns: Vec<String>,
    pub custom_todo_patterns: Vec<String>,
    pub extract_urls: bool,
    pub extract_emails: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            max_tag_length: 50,
            custom_tag_patterns: Vec::new(),
            custom_todo_patterns: vec!["TODO:".to_owned(), "FIXME:".to_owned(), "NOTE:".to_owned()],
            extract_urls: true,
            extract_emails: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub default_format: ExportFormat,
    pub csv_delimiter: char,
    pub include_content: bool,
    /// Characters of content kept in JSON exports; 0 keeps everything.
    pub max_content_preview: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Json,
            csv_delimiter: ',',
            include_content: false,
            max_content_preview: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_tags_shown: usize,
    pub max_keywords_shown: usize,
    pub include_word_count: bool,
    pub include_structure: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_tags_shown: 5,
            max_keywords_shown: 5,
            include_word_count: true,
            include_structure: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub parsing: ParsingConfig,
    pub analysis: AnalysisOptions,
    pub export: ExportConfig,
    pub summary: SummaryConfig,
}

impl Settings {
    /// Loads settings from `explicit`, or from the first config file found in
    /// the working or home directory, merged over the defaults.
    ///
    /// # Errors
    ///
    /// Fails only when an explicitly named file cannot be read or parsed.
    /// A broken discovered file is reported with a warning and ignored.
    #[inline]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = discover_config_file() else {
            debug!("no config file found, using defaults");
            return Ok(Self::default());
        };

        match Self::from_file(&path) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!("Could not load config from {}: {err:#}", path.display());
                Ok(Self::default())
            }
        }
    }

    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML/YAML/JSON for its
    /// extension, or holds values of the wrong type.
    #[inline]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let loaded = parse_config_value(path, &content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        let settings = Self::merged_with(loaded)
            .with_context(|| format!("Invalid settings in config file: {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(settings)
    }

    /// Deep-merges `overrides` onto the defaults.
    ///
    /// # Errors
    ///
    /// Fails if a merged value does not fit its setting's type.
    #[inline]
    pub fn merged_with(overrides: Value) -> Result<Self> {
        let mut base = serde_json::to_value(Self::default())?;
        merge_values(&mut base, overrides);
        Ok(serde_json::from_value(base)?)
    }

    /// Looks up a setting by dotted path such as `summary.max_tags_shown`.
    #[inline]
    #[must_use]
    pub fn get(&self, key_path: &str) -> Option<Value> {
        let root = serde_json::to_value(self).ok()?;
        key_path
            .split('.')
            .try_fold(&root, |value, key| value.get(key))
            .cloned()
    }

    #[inline]
    #[must_use]
    pub fn get_or(&self, key_path: &str, default: Value) -> Value {
        self.get(key_path).unwrap_or(default)
    }

    /// The default settings rendered as a TOML document.
    ///
    /// # Errors
    ///
    /// Fails only if the defaults cannot be serialized.
    #[inline]
    pub fn default_file_contents() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to render default config")
    }

    /// Writes the default settings to `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    #[inline]
    pub fn save_default(path: &Path) -> Result<()> {
        let contents = Self::default_file_contents()?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(dirs) = directories::BaseDirs::new() {
        roots.push(dirs.home_dir().to_path_buf());
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|candidate| candidate.is_file())
}

fn parse_config_value(path: &Path, content: &str) -> Result<Value> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(toml::from_str(content)?),
        Some("yaml" | "yml") => Ok(serde_yaml_ng::from_str(content)?),
        Some("json") => Ok(serde_json::from_str(content)?),
        _ => Err(anyhow!("unsupported config extension, expected toml, yaml or json")),
    }
}

/// Objects merge key by key; any other value replaces the base.
fn merge_values(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, value) => *base = value,
    }
}
