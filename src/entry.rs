use crate::Severity;

/// A single log message on its way to a sink.
///
/// Entries borrow their strings from the call site: they are built, handed
/// to the sink once and discarded, so no allocation happens on the logging
/// path. Sinks that retain entries (see [`CaptureSink`]) copy the fields
/// they need.
///
/// `tag` identifies the logical source emitting the message and should be
/// non-empty; an empty tag is forwarded as-is but makes the output hard to
/// attribute.
///
/// [`CaptureSink`]: crate::CaptureSink
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogEntry<'a> {
    /// Short identifier of the emitting source/component.
    pub tag: &'a str,
    /// Urgency classification of the message.
    pub level: Severity,
    /// The message text, forwarded unchanged.
    pub message: &'a str,
}

impl<'a> LogEntry<'a> {
    pub fn new(tag: &'a str, level: Severity, message: &'a str) -> LogEntry<'a> {
        LogEntry {
            tag,
            level,
            message,
        }
    }
}
