// Copyright 2024 The leveled_logger Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A minimal leveled log emitter.
//!
//! Messages are classified by [`Severity`] (`Verbose < Debug < Info < Warn
//! < Error`), tagged with a source identifier and forwarded to a [`LogSink`]
//! exactly once, synchronously. The emitter applies no policy of its own:
//! filtering, formatting and the output medium all belong to the sink.
//!
//! ## Example
//!
//! ```
//! use leveled_logger::{Config, ConsoleSink, LeveledLogger, Severity};
//!
//! # fn main() -> Result<(), leveled_logger::SinkError> {
//! let sink = ConsoleSink::new(Config::default().with_min_level(Severity::Debug));
//! let logger = LeveledLogger::new(&sink);
//!
//! logger.debug("MainActivity", "reporting technical information useful for debugging")?;
//! logger.error("MainActivity", "a serious error like an app crash")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Example with the `log` facade
//!
//! The crate can also back the `log` macros, with records tagged by their
//! target (or by an overriding tag) and written to a [`ConsoleSink`]:
//!
//! ```
//! use leveled_logger::{Config, Severity};
//!
//! leveled_logger::init_once(
//!     Config::default()
//!         .with_min_level(Severity::Verbose)
//!         .with_tag("mytag"),
//! );
//!
//! log::debug!("this is a debug {}", "message");
//! log::error!("this is printed by default");
//! ```
//!
//! ## Example with a tag filter
//!
//! ```
//! use leveled_logger::{Config, FilterBuilder};
//!
//! leveled_logger::init_once(
//!     Config::default()
//!         .with_filter(FilterBuilder::new().parse("debug,MainActivity=trace").build()),
//! );
//! ```
//!
//! ## Example with a custom log formatter
//!
//! ```
//! use leveled_logger::Config;
//!
//! leveled_logger::init_once(
//!     Config::default()
//!         .format(|f, entry| write!(f, "my_app {}: {}", entry.tag, entry.message))
//! )
//! ```

use log::{Log, Metadata, Record};
use std::fmt;
use std::sync::OnceLock;

pub use config::Config;
pub use entry::LogEntry;
pub use env_filter::{Builder as FilterBuilder, Filter};
pub use severity::Severity;
pub use sink::{CaptureSink, CapturedEntry, ConsoleSink, LogSink, SinkError};

pub(crate) type FormatFn =
    Box<dyn Fn(&mut dyn fmt::Write, &LogEntry<'_>) -> fmt::Result + Sync + Send>;

mod config;
mod entry;
mod severity;
mod sink;

/// Stateless emitter forwarding tagged, leveled messages to a sink.
///
/// The logger is a pure pass-through: it constructs one [`LogEntry`] per
/// call, hands it to the sink once and surfaces the sink's result
/// unchanged. It never filters, retries or deduplicates. Pass the sink by
/// reference to keep ownership at the call site.
#[derive(Debug)]
pub struct LeveledLogger<S> {
    sink: S,
}

impl<S: LogSink> LeveledLogger<S> {
    /// Create new logger instance writing to `sink`.
    pub fn new(sink: S) -> LeveledLogger<S> {
        LeveledLogger { sink }
    }

    /// Forwards `(tag, message)` to the sink with `level` attached.
    ///
    /// Completes synchronously; identical calls produce independent,
    /// identical deliveries. Sink failures propagate as-is.
    pub fn log(&self, tag: &str, level: Severity, message: &str) -> Result<(), SinkError> {
        self.sink.write(&LogEntry::new(tag, level, message))
    }

    /// [`log`](Self::log) at [`Severity::Error`].
    pub fn error(&self, tag: &str, message: &str) -> Result<(), SinkError> {
        self.log(tag, Severity::Error, message)
    }

    /// [`log`](Self::log) at [`Severity::Warn`].
    pub fn warn(&self, tag: &str, message: &str) -> Result<(), SinkError> {
        self.log(tag, Severity::Warn, message)
    }

    /// [`log`](Self::log) at [`Severity::Info`].
    pub fn info(&self, tag: &str, message: &str) -> Result<(), SinkError> {
        self.log(tag, Severity::Info, message)
    }

    /// [`log`](Self::log) at [`Severity::Debug`].
    pub fn debug(&self, tag: &str, message: &str) -> Result<(), SinkError> {
        self.log(tag, Severity::Debug, message)
    }

    /// [`log`](Self::log) at [`Severity::Verbose`].
    pub fn verbose(&self, tag: &str, message: &str) -> Result<(), SinkError> {
        self.log(tag, Severity::Verbose, message)
    }
}

/// `log` facade backend routing records to a [`ConsoleSink`].
#[derive(Debug, Default)]
pub struct FacadeLogger {
    sink: OnceLock<ConsoleSink>,
}

impl FacadeLogger {
    /// Create new facade backend from config
    pub fn new(config: Config) -> FacadeLogger {
        FacadeLogger {
            sink: OnceLock::from(ConsoleSink::new(config)),
        }
    }

    fn sink(&self) -> &ConsoleSink {
        self.sink.get_or_init(ConsoleSink::default)
    }
}

impl Log for FacadeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.sink().config().is_loggable(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let sink = self.sink();
        let config = sink.config();

        if !self.enabled(record.metadata()) {
            return;
        }

        // If no tag was specified, use the record target.
        let tag = config.tag.as_deref().unwrap_or_else(|| record.target());

        // If a custom tag is used, add the module path to the message.
        let message = match &config.tag {
            Some(_) => format!(
                "{}: {}",
                record.module_path().unwrap_or_default(),
                record.args()
            ),
            None => record.args().to_string(),
        };

        // The facade's contract carries no error channel, so a failed
        // write is dropped here rather than propagated.
        let _ = sink.write(&LogEntry::new(tag, record.level().into(), &message));
    }

    fn flush(&self) {}
}

static FACADE_LOGGER: OnceLock<FacadeLogger> = OnceLock::new();

/// Send a log record to the console sink.
///
/// This action does not require initialization. However, without
/// initialization it will use the default config, which emits every entry.
pub fn log(record: &Record) {
    FACADE_LOGGER
        .get_or_init(FacadeLogger::default)
        .log(record)
}

/// Initializes the global `log` logger with a console-backed facade.
///
/// This can be called many times, but will only initialize logging once,
/// and will not replace any other previously initialized logger.
pub fn init_once(config: Config) {
    let min_level = config.min_level;
    let logger = FACADE_LOGGER.get_or_init(|| FacadeLogger::new(config));

    if let Err(err) = log::set_logger(logger) {
        log::debug!("leveled_logger: log::set_logger failed: {}", err);
    } else {
        // Without a configured minimum, everything reaches the sink.
        log::set_max_level(min_level.map_or(log::LevelFilter::Trace, Into::into));
    }
}
