//! Walks all five severities once, the classic logging demo.
//!
//! ```
//! cargo run --example log_levels
//! ```
//!
//! Expected output on stderr, one logcat-style line per severity:
//!
//! ```text
//! E/MainActivity: ERROR: a serious error like an app crash
//! W/MainActivity: WARN: warns about the potential for serious errors
//! ...
//! ```
//!
//! Re-run with a minimum level to see the sink drop the lower ones:
//! replace `Severity::Verbose` below with `Severity::Warn` and only the
//! first two lines remain.

use leveled_logger::{Config, ConsoleSink, LeveledLogger, Severity, SinkError};

const TAG: &str = "MainActivity";

fn main() -> Result<(), SinkError> {
    let sink = ConsoleSink::new(Config::default().with_min_level(Severity::Verbose));
    let logger = LeveledLogger::new(&sink);

    logger.error(TAG, "ERROR: a serious error like an app crash")?;
    logger.warn(TAG, "WARN: warns about the potential for serious errors")?;
    logger.info(
        TAG,
        "INFO: reporting technical information, such as an operation succeeding",
    )?;
    logger.debug(
        TAG,
        "DEBUG: reporting technical information useful for debugging",
    )?;
    logger.verbose(TAG, "VERBOSE: more verbose than DEBUG logs")?;

    // The same walk through the `log` facade; records inherit the tag.
    leveled_logger::init_once(Config::default().with_tag(TAG));
    log::error!("ERROR: a serious error like an app crash");
    log::warn!("WARN: warns about the potential for serious errors");
    log::info!("INFO: reporting technical information, such as an operation succeeding");
    log::debug!("DEBUG: reporting technical information useful for debugging");
    log::trace!("VERBOSE: more verbose than DEBUG logs");

    Ok(())
}
