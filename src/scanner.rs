// src/scanner.rs
use crate::config::Settings;
use crate::core::extract::Extractor;
use crate::core::insight::analyze;
use crate::export::NoteReport;
use crate::ignore::load_ignore_rules;
use crate::models::{AnalysisOptions, NoteFormat, StructuralRecord};
use crate::utils::{is_hidden, is_note_file, read_note};
use anyhow::{Context as _, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Turns note files into reports using one set of settings.
#[derive(Debug, Clone)]
pub struct NoteProcessor {
    extractor: Extractor,
    analysis: Option<AnalysisOptions>,
    format_override: Option<NoteFormat>,
}

impl NoteProcessor {
    /// # Errors
    ///
    /// Fails if the configured custom patterns or analysis options are invalid.
    #[inline]
    pub fn new(settings: &Settings, with_analysis: bool) -> Result<Self> {
        let extractor =
            Extractor::new(&settings.parsing).context("Invalid parsing configuration")?;
        let analysis = if with_analysis {
            settings
                .analysis
                .validate()
                .context("Invalid analysis configuration")?;
            Some(settings.analysis.clone())
        } else {
            None
        };
        Ok(Self {
            extractor,
            analysis,
            format_override: None,
        })
    }

    /// Forces every note to be read as `format` instead of detecting it from the extension.
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: Option<NoteFormat>) -> Self {
        self.format_override = format;
        self
    }

    /// # Errors
    ///
    /// Fails on blank content.
    #[inline]
    pub fn process_text(&self, content: &str, format: NoteFormat) -> Result<StructuralRecord> {
        let mut record = self.extractor.extract(content, format)?;
        if let Some(options) = &self.analysis {
            record.analysis = Some(analyze(content, options)?);
        }
        Ok(record)
    }

    /// # Errors
    ///
    /// Fails if the file cannot be read or is blank.
    #[inline]
    pub fn process_file(&self, path: &Path) -> Result<NoteReport> {
        let content = read_note(path)?;
        let format = self
            .format_override
            .unwrap_or_else(|| NoteFormat::from_path(path));
        debug!("parsing {} as {format}", path.display());
        let record = self
            .process_text(&content, format)
            .with_context(|| format!("Failed to parse note: {}", path.display()))?;
        Ok(NoteReport {
            path: path.display().to_string(),
            record,
        })
    }
}

/// Reports from a directory scan plus the files that could not be parsed.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub reports: Vec<NoteReport>,
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

/// Lists note files below `dir`, skipping hidden entries and `.noteignore` matches.
///
/// # Errors
///
/// Fails if the directory cannot be walked or the ignore file is invalid.
#[inline]
pub fn find_notes(dir: &Path) -> Result<Vec<PathBuf>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };
    let ignore_rules = load_ignore_rules(&absolute_dir)?;

    let mut notes = Vec::new();
    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if is_hidden(e) {
                return false;
            }
            let relative = e.path().strip_prefix(&absolute_dir).unwrap_or(e.path());
            !ignore_rules.is_ignored(relative, e.file_type().is_dir())
        })
    {
        let entry = entry
            .with_context(|| format!("Failed to walk directory: {}", absolute_dir.display()))?;
        if entry.file_type().is_file() && is_note_file(entry.path()) {
            notes.push(entry.into_path());
        }
    }
    Ok(notes)
}

/// Parses every note below `dir`. A note that fails is recorded and skipped.
///
/// # Errors
///
/// Fails only if the directory itself cannot be walked.
#[inline]
pub fn scan_directory(dir: &Path, processor: &NoteProcessor) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    for path in find_notes(dir)? {
        match processor.process_file(&path) {
            Ok(report) => outcome.reports.push(report),
            Err(err) => {
                warn!("Skipping {}: {err:#}", path.display());
                outcome.failures.push((path, err));
            }
        }
    }
    info!(
        parsed = outcome.reports.len(),
        failed = outcome.failures.len(),
        "scanned {}",
        dir.display()
    );
    Ok(outcome)
}
