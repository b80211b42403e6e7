#![allow(dead_code)]

use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

/// Keeps every formatted record so tests can assert on operator notices.
struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let line = format!("{} {}", record.level(), record.args());
        self.lines.lock().unwrap().push(line);
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

pub fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Warning lines mentioning `needle`, in emission order.
pub fn warnings_mentioning(needle: &str) -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.starts_with("WARN") && line.contains(needle))
        .cloned()
        .collect()
}
