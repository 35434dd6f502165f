//! A minimal stderr logger for the `log` facade.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the level used when no `-v` is given.
pub const LOG_ENV: &str = "LABYRINTH_LOG";

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
        // Nowhere left to report a failed write to stderr.
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the logger. `verbosity` is the number of `-v` flags; without any
/// the level comes from [`LOG_ENV`], falling back to warnings only.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = std::env::var(LOG_ENV).ok();
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(verbosity, env.as_deref()));
    Ok(())
}

fn level_for(verbosity: u8, env: Option<&str>) -> LevelFilter {
    match verbosity {
        0 => env
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
