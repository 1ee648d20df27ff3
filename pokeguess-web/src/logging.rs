//! `log` backend that writes to the browser console.

use log::{Level, Log, Metadata, Record};

/// Forwards `log` records to `console.{debug,info,warn,error}`.
pub struct ConsoleLogger {
    max_level: Level,
}

impl ConsoleLogger {
    #[must_use]
    pub const fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

/// Format a record the way it shows up in the console.
#[must_use]
pub fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        #[cfg(target_arch = "wasm32")]
        {
            let msg = wasm_bindgen::JsValue::from(line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&msg),
                Level::Warn => web_sys::console::warn_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = line;
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
});

/// Install the console logger as the global `log` backend.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOGGER.max_level.to_level_filter());
    }
}
