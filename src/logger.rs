//! Minimal logger that writes records to standard error.
//!
//! Standard output is reserved for pixel data,
//! so log records never go there.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {return}
        eprintln!("{}", format_record(record));
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{:>5}] {}: {}", record.level(), record.target(), record.args())
}

/// Maps the number of `-v` flags to a level filter.
pub fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the logger.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level(0), LevelFilter::Warn);
        assert_eq!(level(1), LevelFilter::Info);
        assert_eq!(level(2), LevelFilter::Debug);
        assert_eq!(level(9), LevelFilter::Trace);
    }

    #[test]
    fn second_init_fails_as_error() {
        let _ = init(LevelFilter::Warn);
        let err: anyhow::Error = init(LevelFilter::Warn).unwrap_err().into();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn record_format() {
        let line = format_record(&Record::builder()
            .args(format_args!("wrote {} rows", 3))
            .level(log::Level::Info)
            .target("scanline::render")
            .build());
        assert_eq!(line, "[ INFO] scanline::render: wrote 3 rows");
    }
}
