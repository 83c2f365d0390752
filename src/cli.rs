// src/cli.rs
use crate::config::Settings;
use crate::core::summary::summarize;
use crate::export::{ExportFormat, NoteReport, export_to_path, write_csv, write_json};
use crate::logging::LoggingOpts;
use crate::models::{AnalysisRecord, NoteFormat};
use crate::scanner::{NoteProcessor, scan_directory};
use crate::watch::NoteWatcher;
use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatChoice {
    /// Detect from the file extension
    #[default]
    Auto,
    Markdown,
    #[value(alias = "txt")]
    Text,
}

impl From<FormatChoice> for Option<NoteFormat> {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Auto => None,
            FormatChoice::Markdown => Some(NoteFormat::Markdown),
            FormatChoice::Text => Some(NoteFormat::Text),
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Note file to parse
    #[arg(short, long, conflicts_with = "directory")]
    pub file: Option<PathBuf>,

    /// Parse every note below this directory
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Input format
    #[arg(short = 't', long, value_enum, default_value_t = FormatChoice::Auto)]
    pub format: FormatChoice,

    /// Write the parsed result to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the output extension, then the config)
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Include word, phrase, readability and sentiment analysis
    #[arg(short, long)]
    pub analyze: bool,

    /// Print a short digest instead of the default listing
    #[arg(short, long)]
    pub summary: bool,

    /// Re-parse whenever the file or directory changes
    #[arg(short, long)]
    pub watch: bool,

    /// Config file to use instead of searching for one
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the default config to this path and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,

    /// Keep stop words in the word frequency ranking
    #[arg(long)]
    pub include_stop_words: bool,

    /// Number of top words to report
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Number of key phrases to report
    #[arg(long, value_name = "N")]
    pub top_phrases: Option<usize>,

    #[command(flatten)]
    pub logging: LoggingOpts,
}

impl Args {
    fn apply_overrides(&self, settings: &mut Settings) {
        if self.include_stop_words {
            settings.analysis.include_stop_words = true;
        }
        if let Some(n) = self.top_words {
            settings.analysis.top_words = n;
        }
        if let Some(n) = self.top_phrases {
            settings.analysis.top_phrases = n;
        }
    }

    fn export_format(&self, settings: &Settings) -> ExportFormat {
        self.export
            .or_else(|| self.output.as_deref().and_then(ExportFormat::from_path))
            .unwrap_or(settings.export.default_format)
    }
}

/// Runs the command line tool.
///
/// # Errors
///
/// Fails when no input is given, the input cannot be read or parsed, the
/// config is invalid, or the export cannot be written.
#[inline]
pub fn run(args: Args) -> Result<()> {
    if let Some(path) = &args.init_config {
        Settings::save_default(path)?;
        println!("Default config written to {}", path.display());
        return Ok(());
    }

    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply_overrides(&mut settings);
    let processor = NoteProcessor::new(&settings, args.analyze)?.with_format(args.format.into());

    if let Some(dir) = &args.directory {
        let mut reports = run_directory(&args, dir, &processor, &settings)?;
        if args.watch {
            NoteWatcher::new(dir)?.run(|path| {
                let report = processor.process_file(path)?;
                println!("{}", render(&report, &settings, args.summary));
                upsert_report(&mut reports, report);
                export(&args, &reports, &settings)
            })?;
        }
        return Ok(());
    }

    let Some(file) = &args.file else {
        bail!("Please specify a file to parse using --file or a directory using --directory");
    };
    if !file.exists() {
        bail!("File {} not found", file.display());
    }

    run_file(&args, file, &processor, &settings)?;
    if args.watch {
        NoteWatcher::new(file)?.run(|_| run_file(&args, file, &processor, &settings))?;
    }
    Ok(())
}

fn run_file(args: &Args, file: &Path, processor: &NoteProcessor, settings: &Settings) -> Result<()> {
    info!("Parsing {}...", file.display());
    let report = processor.process_file(file)?;
    println!("{}", render(&report, settings, args.summary));
    export(args, std::slice::from_ref(&report), settings)
}

fn run_directory(
    args: &Args,
    dir: &Path,
    processor: &NoteProcessor,
    settings: &Settings,
) -> Result<Vec<NoteReport>> {
    let outcome = scan_directory(dir, processor)?;
    for report in &outcome.reports {
        println!("== {}", report.path);
        println!("{}", render(report, settings, args.summary));
    }
    for (path, err) in &outcome.failures {
        println!("!! {}: {err:#}", path.display());
    }
    println!(
        "Parsed {} notes ({} failed)",
        outcome.reports.len(),
        outcome.failures.len()
    );
    export(args, &outcome.reports, settings)?;
    Ok(outcome.reports)
}

/// Replaces the report for the same path, or adds it in path order.
fn upsert_report(reports: &mut Vec<NoteReport>, report: NoteReport) {
    if let Some(slot) = reports.iter_mut().find(|r| r.path == report.path) {
        *slot = report;
        return;
    }
    let at = reports.partition_point(|r| r.path < report.path);
    reports.insert(at, report);
}

fn export(args: &Args, reports: &[NoteReport], settings: &Settings) -> Result<()> {
    let format = args.export_format(settings);
    if let Some(output) = &args.output {
        export_to_path(output, format, reports, &settings.export)?;
        println!("Results saved to {}", output.display());
    } else if args.export.is_some() {
        let mut stdout = io::stdout().lock();
        match format {
            ExportFormat::Json => write_json(&mut stdout, reports, &settings.export)?,
            ExportFormat::Csv => write_csv(&mut stdout, reports, &settings.export)?,
        }
    }
    Ok(())
}

/// Renders the console view of one parsed note.
#[inline]
#[must_use]
pub fn render(report: &NoteReport, settings: &Settings, summary: bool) -> String {
    let record = &report.record;
    let mut out = if summary {
        summarize(record, &settings.summary)
    } else {
        let mut lines = vec![format!("Format: {}", record.format)];
        if !record.headers.is_empty() {
            lines.push(format!("Headers found: {}", record.headers.len()));
        }
        if !record.tags.is_empty() {
            let tags: Vec<&str> = record.tags.iter().map(String::as_str).collect();
            lines.push(format!("Tags: {}", tags.join(", ")));
        }
        if !record.keywords.is_empty() {
            lines.push(format!("Keywords: {}", record.keywords.len()));
        }
        if !record.todos.is_empty() {
            lines.push(format!("TODOs: {}", record.todos.len()));
        }
        lines.join("\n")
    };

    if let Some(analysis) = &record.analysis {
        out.push('\n');
        out.push_str(&render_analysis(analysis));
    }
    out
}

fn render_analysis(analysis: &AnalysisRecord) -> String {
    let mut out = String::new();
    if !analysis.top_words.is_empty() {
        out.push_str("Top words:\n");
        for (word, count) in &analysis.top_words {
            let _ = writeln!(out, "  {word:<20} {count:>5}");
        }
    }
    if !analysis.key_phrases.is_empty() {
        out.push_str("Key phrases:\n");
        for (phrase, count) in &analysis.key_phrases {
            let _ = writeln!(out, "  {phrase:<40} {count:>5}");
        }
    }

    let stats = &analysis.readability;
    let _ = writeln!(
        out,
        "Readability: {:.1} Flesch reading ease ({} sentences, {} words, {:.2} words/sentence, {:.2} syllables/word)",
        stats.flesch_reading_ease,
        stats.sentence_count,
        stats.word_count,
        stats.avg_words_per_sentence,
        stats.avg_syllables_per_word
    );

    let sentiment = &analysis.sentiment_indicators;
    let _ = write!(
        out,
        "Sentiment indicators: positive {}, negative {}, urgent {}",
        sentiment.positive_count, sentiment.negative_count, sentiment.urgent_count
    );
    out
}
