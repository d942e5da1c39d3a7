#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level, e.g. `BATTLEGRID_LOG=debug`.
pub const LOG_ENV_VAR: &str = "BATTLEGRID_LOG";

/// Writes records from this crate to stderr as `LEVEL module - message`.
struct EngineLogger;

impl log::Log for EngineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && is_engine_target(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .target()
            .strip_prefix("battlegrid::")
            .unwrap_or(record.target());
        eprintln!("{:<5} {} - {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: EngineLogger = EngineLogger;

/// `true` for log targets inside this crate. Records from dependencies are
/// dropped.
pub fn is_engine_target(target: &str) -> bool {
    target == "battlegrid" || target.starts_with("battlegrid::")
}

/// Initialize logging with a level taken from `BATTLEGRID_LOG`, falling
/// back to `info` if the variable is not set or invalid.
pub fn init_logging() {
    init_logging_with(LevelFilter::Info);
}

/// Like [`init_logging`] but with a caller-chosen fallback level.
///
/// `BATTLEGRID_LOG` still wins when it holds a valid level. Only the first
/// call installs the logger; later calls just adjust the level.
pub fn init_logging_with(default: LevelFilter) {
    let level = env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
