//! Logging setup for prp-runner using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `PRP_RUNNER_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `warn`
//!
//! Diagnostics always go to stderr: stdout carries the runner's own output.
//! Colour codes are only emitted when stderr is a terminal.

use crate::cli::LogLevel;
use clap::ValueEnum;
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "PRP_RUNNER_LOG";

/// Level used when neither the flag nor the environment selects one.
pub(crate) const DEFAULT_LEVEL: Level = Level::WARN;

/// Install the global logging subscriber.
///
/// Call once at startup; a second call leaves the first subscriber in place.
pub fn init_logging(cli_level: Option<LogLevel>) {
    let env_level = std::env::var(LOG_ENV).ok();
    let level = resolve_level(cli_level, env_level.as_deref());
    let ansi = std::io::stderr().is_terminal();

    let _ = tracing::subscriber::set_global_default(subscriber(level, ansi, std::io::stderr));
}

/// Build the formatting subscriber used by the binary.
pub(crate) fn subscriber<W>(
    level: Level,
    ansi: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish()
}

impl From<LogLevel> for Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn resolve_level(cli_level: Option<LogLevel>, env_level: Option<&str>) -> Level {
    cli_level
        .or_else(|| env_level.and_then(|s| LogLevel::from_str(s.trim(), true).ok()))
        .map(Level::from)
        .unwrap_or(DEFAULT_LEVEL)
}

/// Run `f` with a plain-text subscriber at `level` and return what it logged.
#[cfg(test)]
pub(crate) fn capture_logs<T>(level: Level, f: impl FnOnce() -> T) -> (T, String) {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buf = SharedBuf::default();
    let writer = buf.clone();
    let value = tracing::subscriber::with_default(
        subscriber(level, false, move || writer.clone()),
        f,
    );

    let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    (value, logged)
}
