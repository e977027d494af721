//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and forwards every line to a sink (the browser console, stderr, ...).
//!
//! The buffer backs in-app diagnostics views; the sink is where lines go
//! for developers.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One formatted log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Where each line is written besides the buffer
pub type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
    sink: Sink,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize, sink: Sink) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().cloned().collect()
    }

    fn push(&self, line: LogLine) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        (self.sink)(&line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logger(app_name: &str, level: LevelFilter, capacity: usize, sink: Sink) -> Result<(), String> {
    if let Some(existing) = LOGGER.get() {
        return Err(format!("logger already initialized for `{}`", existing.app_name()));
    }
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, level, capacity, sink));
    log::set_logger(logger).map_err(|e| format!("failed to install logger: {}", e))?;
    log::set_max_level(level);
    log::info!("event=logger_init app={} level={}", app_name, level);
    Ok(())
}

/// Recent lines of the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<LogLine> {
    LOGGER.get().map(|logger| logger.recent()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn capture() -> (Sink, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = seen.clone();
        let sink: Sink = Box::new(move |line: &LogLine| {
            sink_seen.lock().unwrap().push(line.message.clone());
        });
        (sink, seen)
    }

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("board")
                .build(),
        );
    }

    #[test]
    fn test_buffer_keeps_most_recent_lines() {
        let (sink, _) = capture();
        let logger = RollingLogger::new("test", LevelFilter::Debug, 3, sink);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let messages: Vec<String> = logger.recent().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_level_filter_applies_to_sink_and_buffer() {
        let (sink, seen) = capture();
        let logger = RollingLogger::new("test", LevelFilter::Warn, 10, sink);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Error, "storage failed");

        assert_eq!(*seen.lock().unwrap(), vec!["storage failed".to_string()]);
        assert_eq!(logger.recent().len(), 1);
        assert_eq!(logger.recent()[0].level, Level::Error);
    }

    #[test]
    fn test_line_display() {
        let (sink, _) = capture();
        let logger = RollingLogger::new("test", LevelFilter::Info, 1, sink);
        emit(&logger, Level::Info, "event=board_load status=ok");

        let rendered = logger.recent()[0].to_string();
        assert!(rendered.contains("INFO  board: event=board_load status=ok"));
    }

    #[test]
    fn test_zero_capacity_still_keeps_one_line() {
        let (sink, _) = capture();
        let logger = RollingLogger::new("test", LevelFilter::Info, 0, sink);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
