//! Process-wide log capture for tests.
//!
//! Tests run in parallel and share the one installed logger, so assertions
//! match records by message text unique to the test.

use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::{const_mutex, Mutex};

static RECORDS: Mutex<Vec<(Level, String)>> = const_mutex(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS
                .lock()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

pub fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Warn);
        }
    });
}

/// Number of captured records at `level` whose message contains `text`.
pub fn count(level: Level, text: &str) -> usize {
    RECORDS
        .lock()
        .iter()
        .filter(|(recorded, message)| *recorded == level && message.contains(text))
        .count()
}
