#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{self, Level, LevelFilter, Metadata, Record};

const ENV_VAR: &str = "BATTLEFLEET_LOG";

/// Writes to stderr so log lines never interleave with the boards on stdout.
/// Records from dependencies are only shown at `warn` and above.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && (metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
                || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{:<5} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `BATTLEFLEET_LOG` (`off`, `error` .. `trace`), `info` when unset or invalid.
pub fn level_from_env() -> LevelFilter {
    env::var(ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Later calls are ignored.
pub fn init_logging() {
    let level = level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
