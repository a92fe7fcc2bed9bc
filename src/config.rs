use crate::{FormatFn, LogEntry, Severity};
use std::fmt;

/// Output policy for a [`ConsoleSink`].
///
/// Filtering is deliberately a sink-side concern: the emitter forwards
/// every entry, and the sink applies whatever policy is configured here.
///
/// [`ConsoleSink`]: crate::ConsoleSink
#[derive(Default)]
pub struct Config {
    pub(crate) min_level: Option<Severity>,
    pub(crate) filter: Option<env_filter::Filter>,
    pub(crate) tag: Option<String>,
    pub(crate) custom_format: Option<FormatFn>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("min_level", &self.min_level)
            .field("filter", &self.filter)
            .field("tag", &self.tag)
            .field(
                "custom_format",
                match &self.custom_format {
                    Some(_) => &"Some(_)",
                    None => &"None",
                },
            )
            .finish()
    }
}

impl Config {
    /// Changes the minimum severity the sink will emit.
    ///
    /// Entries strictly below this level are dropped by the sink; the drop
    /// is deliberate policy, not a failure, so `write` still reports `Ok`.
    /// By default no minimum applies and every entry is emitted.
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = Some(level);
        self
    }

    pub(crate) fn is_loggable(&self, level: Severity) -> bool {
        self.min_level.map_or(true, |min| level >= min)
    }

    /// Installs an `env_filter` filter, matched against each entry with the
    /// tag as target. Allows directives such as `"warn,MainActivity=debug"`.
    pub fn with_filter(mut self, filter: env_filter::Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub(crate) fn filter_matches(&self, entry: &LogEntry<'_>) -> bool {
        if let Some(ref filter) = self.filter {
            filter.matches(
                &log::Record::builder()
                    .level(entry.level.into())
                    .target(entry.tag)
                    .args(format_args!("{}", entry.message))
                    .build(),
            )
        } else {
            true
        }
    }

    /// Sets the default tag the `log` facade bridge attaches to records.
    ///
    /// Records arriving through [`init_once`] carry no explicit tag; with
    /// this set they are tagged with it, otherwise the record's target is
    /// used. Entries logged directly through [`LeveledLogger`] always carry
    /// their own tag and ignore this setting.
    ///
    /// [`init_once`]: crate::init_once
    /// [`LeveledLogger`]: crate::LeveledLogger
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the format function for formatting the log output.
    /// ```
    /// # use leveled_logger::Config;
    /// leveled_logger::init_once(
    ///     Config::default()
    ///         .format(|f, entry| write!(f, "my_app [{}]: {}", entry.tag, entry.message))
    /// )
    /// ```
    pub fn format<F>(mut self, format: F) -> Self
    where
        F: Fn(&mut dyn fmt::Write, &LogEntry<'_>) -> fmt::Result + Sync + Send + 'static,
    {
        self.custom_format = Some(Box::new(format));
        self
    }
}
