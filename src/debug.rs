//! Log bridge routing the `log` facade to stderr.
//!
//! Level precedence: the `--log-level` CLI flag, then `RUST_LOG`, then the
//! `logLevel` setting (applied through [`set_log_level`] once settings are
//! loaded). Until settings are loaded the level is `warn`.

use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGER: StderrLogger = StderrLogger;

/// Set when the CLI flag or `RUST_LOG` chose the level.
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let pinned = cli_level.or_else(rust_log_level);
    LEVEL_PINNED.store(pinned.is_some(), Ordering::Relaxed);

    if log::set_logger(&LOGGER).is_err() {
        log::debug!("Log bridge already installed");
    }
    log::set_max_level(pinned.unwrap_or(LevelFilter::Warn));
}

/// Apply the level from settings unless the CLI flag or `RUST_LOG` already
/// chose one.
pub fn set_log_level(level: LevelFilter) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        return;
    }
    log::set_max_level(level);
}

/// Level named by `RUST_LOG`, when it is a plain level name.
fn rust_log_level() -> Option<LevelFilter> {
    std::env::var("RUST_LOG").ok()?.trim().parse().ok()
}
