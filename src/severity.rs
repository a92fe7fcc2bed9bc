use std::fmt;

/// Classification of a log message's urgency.
///
/// Variants are ordered by increasing urgency, so
/// `Severity::Verbose < Severity::Error` holds and a sink's minimum-level
/// policy can be expressed as a plain comparison.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Severity {
    /// The least specific level; typically removed once a feature works.
    Verbose,

    /// Technical detail useful while investigating an issue.
    Debug,

    /// Useful information, such as an operation completing successfully.
    Info,

    /// Something that should be fixed to avoid a more serious error.
    Warn,

    /// Something went seriously wrong, such as the reason for a crash.
    Error,
}

impl Severity {
    /// All severities, from least to most urgent.
    pub const ALL: [Severity; 5] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Lowercase name, matching the spelling `env_filter` directives use.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    /// Renders the single-letter initial used by logcat-style output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Verbose => "V",
            Severity::Debug => "D",
            Severity::Info => "I",
            Severity::Warn => "W",
            Severity::Error => "E",
        })
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Severity {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Verbose,
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> log::Level {
        match severity {
            Severity::Error => log::Level::Error,
            Severity::Warn => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
            Severity::Verbose => log::Level::Trace,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> log::LevelFilter {
        log::Level::from(severity).to_level_filter()
    }
}
