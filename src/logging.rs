//! Console logging
//!
//! Installs the rolling logger with a sink that writes to the browser console.

use log::{Level, LevelFilter};
use rolling_logger::LogLine;
use wasm_bindgen::JsValue;

/// Lines kept for the diagnostics panel
const LOG_HISTORY: usize = 200;

pub fn init() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = rolling_logger::init_logger("StickyKanban", level, LOG_HISTORY, Box::new(console_sink)) {
        web_sys::console::error_1(&JsValue::from_str(&err));
    }
}

fn console_sink(line: &LogLine) {
    let text = JsValue::from_str(&line.to_string());
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        _ => web_sys::console::log_1(&text),
    }
}
