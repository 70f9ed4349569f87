//! Stderr logger for the CLI
//!
//! Library code logs through the `log` facade; this routes those records to
//! stderr so stdout stays clean for the report itself.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "Error",
            Level::Warn => "Warning",
            Level::Info => "Info",
            Level::Debug | Level::Trace => "Debug",
        };
        eprintln!("  {}: {}", tag, record.args());
    }

    fn flush(&self) {}
}

/// Install the logger. `verbose` lowers the threshold from warn to debug.
pub fn init(verbose: bool) {
    // Err only when a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}
