#[test]
fn default_init() {
    leveled_logger::init_once(Default::default());

    // No minimum level configured, so everything is handed to the sink.
    assert_eq!(log::max_level(), log::LevelFilter::Trace);
}
