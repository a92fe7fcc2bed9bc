use leveled_logger::{CaptureSink, Config, FilterBuilder, LeveledLogger, Severity};

#[test]
fn min_level_warn_drops_lower_severities() {
    let sink = CaptureSink::with_config(Config::default().with_min_level(Severity::Warn));
    let logger = LeveledLogger::new(&sink);

    logger.error("tag", "error").unwrap();
    logger.warn("tag", "warn").unwrap();
    logger.info("tag", "info").unwrap();
    logger.debug("tag", "debug").unwrap();
    logger.verbose("tag", "verbose").unwrap();

    let delivered: Vec<Severity> = sink.take().into_iter().map(|e| e.level).collect();
    assert_eq!(delivered, [Severity::Error, Severity::Warn]);
}

#[test]
fn dropped_entries_still_report_success() {
    let sink = CaptureSink::with_config(Config::default().with_min_level(Severity::Error));
    let logger = LeveledLogger::new(&sink);

    // Dropping by policy is not a failure.
    assert!(logger.verbose("tag", "below the minimum").is_ok());
    assert!(sink.take().is_empty());
}

#[test]
fn filter_directives_apply_per_tag() {
    let filter = FilterBuilder::new().parse("warn,Database=trace").build();
    let sink = CaptureSink::with_config(Config::default().with_filter(filter));
    let logger = LeveledLogger::new(&sink);

    logger.verbose("Database", "verbose survives the tag override").unwrap();
    logger.info("Settings", "info falls under the default directive").unwrap();
    logger.error("Settings", "errors always pass").unwrap();

    let delivered: Vec<String> = sink.take().into_iter().map(|e| e.tag).collect();
    assert_eq!(delivered, ["Database", "Settings"]);
}
