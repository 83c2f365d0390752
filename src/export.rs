// src/export.rs
use crate::config::ExportConfig;
use crate::models::StructuralRecord;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const CSV_COLUMNS: [&str; 11] = [
    "path",
    "type",
    "level",
    "content",
    "format",
    "content_words",
    "content_lines",
    "header_count",
    "tag_count",
    "keyword_count",
    "todo_count",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Picks the format from an output path extension, if it names one.
    #[inline]
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

/// A parsed note together with where it came from.
#[derive(Debug, Clone)]
pub struct NoteReport {
    pub path: String,
    pub record: StructuralRecord,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    path: &'a str,
    #[serde(flatten)]
    record: &'a StructuralRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// Writes one JSON object, or an array when more than one note is exported.
///
/// # Errors
///
/// Fails if serialization or the underlying writer fails.
#[inline]
pub fn write_json<W: Write>(out: &mut W, reports: &[NoteReport], config: &ExportConfig) -> Result<()> {
    let documents: Vec<JsonDocument<'_>> = reports
        .iter()
        .map(|report| JsonDocument {
            path: &report.path,
            record: &report.record,
            content: config
                .include_content
                .then(|| content_preview(&report.record.content, config.max_content_preview)),
        })
        .collect();

    match documents.as_slice() {
        [single] => serde_json::to_writer_pretty(&mut *out, single)?,
        many => serde_json::to_writer_pretty(&mut *out, many)?,
    }
    writeln!(out)?;
    Ok(())
}

/// Writes a `document_info` row per note followed by one row per header,
/// tag, keyword and todo.
///
/// # Errors
///
/// Fails if the configured delimiter is not a single byte or writing fails.
#[inline]
pub fn write_csv<W: Write>(out: &mut W, reports: &[NoteReport], config: &ExportConfig) -> Result<()> {
    let delimiter = u8::try_from(config.csv_delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("CSV delimiter must be ASCII: {:?}", config.csv_delimiter))?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_writer(out);
    wtr.write_record(CSV_COLUMNS)?;

    for report in reports {
        let record = &report.record;
        let mut info_row = vec![
            report.path.clone(),
            "document_info".to_owned(),
            String::new(),
            String::new(),
            record.format.as_str().to_owned(),
        ];
        info_row.extend(
            [
                record.word_count(),
                record.line_count(),
                record.headers.len(),
                record.tags.len(),
                record.keywords.len(),
                record.todos.len(),
            ]
            .iter()
            .map(ToString::to_string),
        );
        wtr.write_record(&info_row)?;

        for header in &record.headers {
            write_item_row(&mut wtr, report, "header", &header.level.to_string(), &header.title)?;
        }
        for tag in &record.tags {
            write_item_row(&mut wtr, report, "tag", "", tag)?;
        }
        for keyword in &record.keywords {
            write_item_row(&mut wtr, report, "keyword", "", keyword)?;
        }
        for todo in &record.todos {
            write_item_row(&mut wtr, report, "todo", "", todo)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn write_item_row<W: Write>(
    wtr: &mut csv::Writer<W>,
    report: &NoteReport,
    kind: &str,
    level: &str,
    content: &str,
) -> Result<()> {
    wtr.write_record([
        report.path.as_str(),
        kind,
        level,
        content,
        report.record.format.as_str(),
        "",
        "",
        "",
        "",
        "",
        "",
    ])?;
    Ok(())
}

/// Exports `reports` to `path` in the given format.
///
/// # Errors
///
/// Fails if the file cannot be created or writing fails.
#[inline]
pub fn export_to_path(
    path: &Path,
    format: ExportFormat,
    reports: &[NoteReport],
    config: &ExportConfig,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    match format {
        ExportFormat::Json => write_json(&mut out, reports, config)?,
        ExportFormat::Csv => write_csv(&mut out, reports, config)?,
    }
    out.flush()
        .with_context(|| format!("Failed to write export file: {}", path.display()))
}

fn content_preview(content: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return content.to_owned();
    }
    content.chars().take(max_chars).collect()
}
