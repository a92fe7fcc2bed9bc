use leveled_logger::{Config, Severity};
use log::LevelFilter;

#[test]
fn multiple_init() {
    leveled_logger::init_once(Config::default().with_min_level(Severity::Verbose));

    // Second initialization should be silently ignored
    leveled_logger::init_once(Config::default().with_min_level(Severity::Error));

    assert_eq!(log::max_level(), LevelFilter::Trace);
}
