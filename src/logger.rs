//! Logging backend
//!
//! Game code logs through the `log` facade. This backend forwards every
//! record to macroquad's logging, which prints to stdout natively and to the
//! browser console on WASM.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct MacroquadLogger;

static LOGGER: MacroquadLogger = MacroquadLogger;

impl Log for MacroquadLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => macroquad::miniquad::error!("{}", line),
            Level::Warn => macroquad::miniquad::warn!("{}", line),
            Level::Info => macroquad::miniquad::info!("{}", line),
            Level::Debug => macroquad::miniquad::debug!("{}", line),
            Level::Trace => macroquad::miniquad::trace!("{}", line),
        }
    }

    fn flush(&self) {}
}

/// Parse a level name from the config ("off", "error", ... "trace")
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Install the logger. Safe to call more than once; later calls only adjust the level.
pub fn init(level: LevelFilter) {
    // set_logger fails if a logger is already installed, which is fine here
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
