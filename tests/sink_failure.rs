use leveled_logger::{LeveledLogger, LogEntry, LogSink, Severity, SinkError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sink whose medium is permanently gone, counting delivery attempts.
struct ClosedSink {
    attempts: AtomicUsize,
}

impl ClosedSink {
    fn new() -> ClosedSink {
        ClosedSink {
            attempts: AtomicUsize::new(0),
        }
    }
}

impl LogSink for ClosedSink {
    fn write(&self, _entry: &LogEntry<'_>) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SinkError::Unavailable("medium closed".to_string()))
    }
}

#[test]
fn sink_failure_propagates_without_retry() {
    let sink = ClosedSink::new();
    let logger = LeveledLogger::new(&sink);

    let err = logger
        .log("tag", Severity::Error, "message")
        .expect_err("closed sink must fail the call");
    assert!(matches!(err, SinkError::Unavailable(_)));
    assert_eq!(sink.attempts.load(Ordering::SeqCst), 1);

    // A second call is a fresh attempt, not a retry of the first.
    let _ = logger.log("tag", Severity::Error, "message");
    assert_eq!(sink.attempts.load(Ordering::SeqCst), 2);
}
