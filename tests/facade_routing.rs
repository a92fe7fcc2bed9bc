use leveled_logger::{Config, Severity};
use std::sync::Mutex;

static CAPTURED: Mutex<Vec<(String, Severity, String)>> = Mutex::new(Vec::new());

#[test]
fn records_are_tagged_by_target_and_translated() {
    leveled_logger::init_once(Config::default().format(|f, entry| {
        CAPTURED.lock().unwrap().push((
            entry.tag.to_string(),
            entry.level,
            entry.message.to_string(),
        ));
        // Keep stderr quiet during the test run.
        write!(f, "")
    }));

    log::warn!(target: "Settings", "Warn");
    log::trace!(target: "Database", "Trace");
    log::error!(target: "MainActivity", "Error");

    let captured = CAPTURED.lock().unwrap();
    assert_eq!(
        *captured,
        [
            ("Settings".to_string(), Severity::Warn, "Warn".to_string()),
            ("Database".to_string(), Severity::Verbose, "Trace".to_string()),
            ("MainActivity".to_string(), Severity::Error, "Error".to_string()),
        ]
    );
}
