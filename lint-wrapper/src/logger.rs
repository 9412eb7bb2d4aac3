//! A module to initialize and customize the logger object used for diagnostics.
//!
//! Records are written to stderr because stdout is shared with the lint tool.

use std::{env, str::FromStr};

use anyhow::{Error, Result};
use colored::{Colorize, control::set_override};
use log::{Level, LevelFilter, Metadata, Record};

/// Environment variable that sets the maximum log level.
pub const LOG_ENV: &str = "LINT_WRAPPER_LOG";
/// Environment variable that forces colored level tags.
pub const COLOR_ENV: &str = "LINT_WRAPPER_COLOR";

#[derive(Default)]
struct SimpleLogger;

impl SimpleLogger {
    fn level_color(level: &Level) -> String {
        let name = format!("{:>5}", level.as_str().to_uppercase());
        match level {
            Level::Error => name.red().bold().to_string(),
            Level::Warn => name.yellow().bold().to_string(),
            Level::Info => name.green().bold().to_string(),
            Level::Debug => name.blue().bold().to_string(),
            Level::Trace => name.magenta().bold().to_string(),
        }
    }
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}]: {}",
                Self::level_color(&record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Parse the value of [`LOG_ENV`], defaulting to [`LevelFilter::Warn`].
fn level_from(value: Option<String>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

/// A function to initialize the private `LOGGER`.
///
/// The logging level defaults to [`LevelFilter::Warn`] and can be changed with
/// the `LINT_WRAPPER_LOG` environment variable.
/// Returns a [`SetLoggerError`](log::SetLoggerError) if the `LOGGER` is already initialized.
pub fn init() -> Result<()> {
    let logger: SimpleLogger = SimpleLogger;
    if env::var(COLOR_ENV).is_ok_and(|v| ["on", "1", "true"].contains(&v.as_str())) {
        set_override(true);
    }
    let level = level_from(env::var(LOG_ENV).ok());
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))
        .map_err(Error::from)
}

/// Like [`init()`] but ignores a logger that is already installed.
pub fn try_init() {
    init().unwrap_or(());
}

#[cfg(test)]
mod test {
    use log::LevelFilter;

    use super::{SimpleLogger, level_from, try_init};

    #[test]
    fn trace_log() {
        try_init();
        assert!(SimpleLogger::level_color(&log::Level::Trace).contains("TRACE"));
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Trace);
        log::trace!("A dummy log statement for code coverage");
        log::set_max_level(previous);
        assert_eq!(log::max_level(), previous);
    }

    #[test]
    fn level_parsing() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("debug".to_string())), LevelFilter::Debug);
        assert_eq!(level_from(Some(" OFF ".to_string())), LevelFilter::Off);
        assert_eq!(level_from(Some("chatty".to_string())), LevelFilter::Warn);
    }
}
