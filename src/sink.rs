use crate::{Config, LogEntry, Severity};
use std::fmt::{self, Write as _};
use std::io::{self, Write as _};
use std::sync::Mutex;
use thiserror::Error;

/// Failure reported by a sink. The emitter never catches or retries these;
/// they surface unchanged to whoever called `log`.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying medium refused the entry or is gone.
    #[error("sink unavailable: {0}")]
    Unavailable(String),

    /// A format function failed while rendering the entry.
    #[error("failed to format log entry: {0}")]
    Format(#[from] fmt::Error),

    /// Writing the rendered entry to the output failed.
    #[error("failed to write log entry: {0}")]
    Io(#[from] io::Error),
}

/// Destination for log entries.
///
/// The sink owns all output policy: where entries go, how they are
/// rendered, and which ones to drop. A level-based drop is a successful
/// write from the caller's point of view.
pub trait LogSink {
    /// Accepts one entry and performs the output side effect.
    fn write(&self, entry: &LogEntry<'_>) -> Result<(), SinkError>;
}

/// Sinks are shared by reference; the logger never needs to own one.
impl<S: LogSink + ?Sized> LogSink for &S {
    fn write(&self, entry: &LogEntry<'_>) -> Result<(), SinkError> {
        (**self).write(entry)
    }
}

/// Sink writing one line per entry to standard error.
///
/// The default line format is logcat-flavored: `E/MainActivity: message`.
/// A [`Config`] format function replaces it entirely. Filtering configured
/// on the [`Config`] (minimum level, `env_filter` directives) is applied
/// here, not in the emitter.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    config: Config,
}

impl ConsoleSink {
    /// Create new sink instance from config
    pub fn new(config: Config) -> ConsoleSink {
        ConsoleSink { config }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry<'_>) -> Result<(), SinkError> {
        if !self.config.is_loggable(entry.level) {
            return Ok(());
        }

        // this also checks the level, but only if a filter was
        // installed.
        if !self.config.filter_matches(entry) {
            return Ok(());
        }

        let mut line = String::new();
        match &self.config.custom_format {
            Some(format) => format(&mut line, entry)?,
            None => write!(line, "{}/{}: {}", entry.level, entry.tag, entry.message)?,
        }

        // One locked write per entry keeps concurrent lines whole.
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{line}")?;
        Ok(())
    }
}

/// An entry retained by a [`CaptureSink`], with the borrowed strings copied
/// out so it can outlive the logging call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedEntry {
    pub tag: String,
    pub level: Severity,
    pub message: String,
}

impl From<&LogEntry<'_>> for CapturedEntry {
    fn from(entry: &LogEntry<'_>) -> CapturedEntry {
        CapturedEntry {
            tag: entry.tag.to_owned(),
            level: entry.level,
            message: entry.message.to_owned(),
        }
    }
}

/// Capturing sink for tests and verification.
///
/// Records the entries it receives in delivery order and never fails. With
/// [`with_config`](CaptureSink::with_config) it applies the same drop
/// policy a [`ConsoleSink`] would, so filtering can be observed end to end.
#[derive(Debug, Default)]
pub struct CaptureSink {
    config: Config,
    entries: Mutex<Vec<CapturedEntry>>,
}

impl CaptureSink {
    pub fn new() -> CaptureSink {
        CaptureSink::default()
    }

    /// Capturing sink honoring `config`'s minimum level and filter.
    pub fn with_config(config: Config) -> CaptureSink {
        CaptureSink {
            config,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything captured so far.
    pub fn entries(&self) -> Vec<CapturedEntry> {
        self.entries
            .lock()
            .expect("capture sink lock should not be poisoned")
            .clone()
    }

    /// Drains and returns everything captured so far.
    pub fn take(&self) -> Vec<CapturedEntry> {
        std::mem::take(
            &mut *self
                .entries
                .lock()
                .expect("capture sink lock should not be poisoned"),
        )
    }
}

impl LogSink for CaptureSink {
    fn write(&self, entry: &LogEntry<'_>) -> Result<(), SinkError> {
        if !self.config.is_loggable(entry.level) || !self.config.filter_matches(entry) {
            return Ok(());
        }
        self.entries
            .lock()
            .expect("capture sink lock should not be poisoned")
            .push(entry.into());
        Ok(())
    }
}
