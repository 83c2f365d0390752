// src/watch.rs
use crate::ignore::{IgnoreRules, load_ignore_rules};
use crate::utils::{is_hidden_path, is_note_file};
use anyhow::{Context as _, Result, bail};
use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode, Watcher as _};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};
use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Events for the same path inside this window are reported once.
pub const DEBOUNCE: Duration = Duration::from_secs(2);

const IDLE_WAIT: Duration = Duration::from_secs(60);

/// Watches one note file, or every note below a directory, for changes.
#[derive(Debug)]
pub struct NoteWatcher {
    root: PathBuf,
    file: Option<PathBuf>,
    debounce: Duration,
    ignore_rules: IgnoreRules,
}

impl NoteWatcher {
    /// A single file is watched through its parent directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory is unavailable or `.noteignore` is invalid.
    #[inline]
    pub fn new(target: &Path) -> Result<Self> {
        let absolute = if target.is_absolute() {
            target.to_path_buf()
        } else {
            env::current_dir()?.join(target)
        };

        if absolute.is_dir() {
            let ignore_rules = load_ignore_rules(&absolute)?;
            return Ok(Self {
                root: absolute,
                file: None,
                debounce: DEBOUNCE,
                ignore_rules,
            });
        }

        let root = absolute
            .parent()
            .map_or_else(|| absolute.clone(), Path::to_path_buf);
        Ok(Self {
            root,
            file: Some(absolute),
            debounce: DEBOUNCE,
            ignore_rules: IgnoreRules::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Whether a change to `path` should trigger a re-parse.
    #[inline]
    #[must_use]
    pub fn is_relevant(&self, path: &Path) -> bool {
        if let Some(file) = &self.file {
            return path == file;
        }
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        is_note_file(path)
            && !is_hidden_path(relative)
            && !self.ignore_rules.is_file_excluded(relative)
    }

    /// Relevant notes that still exist, sorted and without duplicates.
    #[inline]
    #[must_use]
    pub fn changed_notes<I>(&self, paths: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths
            .into_iter()
            .filter(|path| path.is_file() && self.is_relevant(path))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Starts the background watcher.
    ///
    /// # Errors
    ///
    /// Fails if the platform watcher cannot be created or the root cannot be watched.
    #[inline]
    pub fn start(&self) -> Result<ActiveWatch<'_>> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer =
            new_debouncer(self.debounce, tx).context("Failed to start file watcher")?;
        let mode = if self.file.is_some() {
            RecursiveMode::NonRecursive
        } else {
            RecursiveMode::Recursive
        };
        debouncer
            .watcher()
            .watch(&self.root, mode)
            .with_context(|| format!("Failed to watch {}", self.root.display()))?;
        debug!("watching {} ({mode:?})", self.root.display());

        Ok(ActiveWatch {
            watcher: self,
            _debouncer: debouncer,
            events: rx,
        })
    }

    /// Calls `on_change` for every changed note until the process is interrupted.
    ///
    /// # Errors
    ///
    /// Fails if the watcher cannot start or stops unexpectedly; errors from
    /// `on_change` are only logged.
    #[inline]
    pub fn run<F>(&self, mut on_change: F) -> Result<()>
    where
        F: FnMut(&Path) -> Result<()>,
    {
        let active = self.start()?;
        let target = self.file.as_deref().unwrap_or(&self.root);
        info!("Watching {} (press Ctrl+C to stop)", target.display());
        loop {
            let Some(changed) = active.next_changes(IDLE_WAIT)? else {
                continue;
            };
            for path in changed {
                info!("File changed: {}", path.display());
                if let Err(err) = on_change(&path) {
                    error!("{err:#}");
                }
            }
        }
    }
}

/// A running watch; dropping it stops the platform watcher.
pub struct ActiveWatch<'a> {
    watcher: &'a NoteWatcher,
    _debouncer: Debouncer<RecommendedWatcher>,
    events: Receiver<DebounceEventResult>,
}

impl ActiveWatch<'_> {
    /// Waits up to `timeout` for the next debounced batch.
    ///
    /// Returns `Ok(None)` when nothing arrived in time.
    ///
    /// # Errors
    ///
    /// Fails if the watcher thread has gone away.
    #[inline]
    pub fn next_changes(&self, timeout: Duration) -> Result<Option<Vec<PathBuf>>> {
        match self.events.recv_timeout(timeout) {
            Ok(Ok(events)) => {
                let paths = events.into_iter().map(|event| event.path);
                Ok(Some(self.watcher.changed_notes(paths)))
            }
            Ok(Err(err)) => {
                warn!("file watcher error: {err:?}");
                Ok(Some(Vec::new()))
            }
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => bail!("file watcher stopped unexpectedly"),
        }
    }
}
