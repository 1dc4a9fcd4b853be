//! Console Logger
//!
//! A `log` backend for browser apps. Records are timestamped and routed to the
//! matching `console.*` method so they keep their severity in devtools.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing to `window.console`
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug => web_sys::console::log_1(&value),
            Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
///
/// Unknown names fall back to `default`.
pub fn parse_level(name: &str, default: LevelFilter) -> LevelFilter {
    name.trim().parse().unwrap_or(default)
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    // Keep only the last path segment: "taskboard_ui::session" -> "session"
    let short_target = target.rsplit("::").next().unwrap_or(target);
    format!("{} {:<5} [{}] {}", timestamp, level, short_target, message)
}
