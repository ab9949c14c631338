//! Global tracing subscriber setup for the binary.
//!
//! `RUST_LOG` wins over the configured level when set. Output goes to stderr
//! by default so JSON reports on stdout stay machine-readable.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

fn build_filter(level: &str) -> EnvFilter {
    match std::env::var("RUST_LOG") {
        Ok(val) if !val.is_empty() => EnvFilter::builder().parse_lossy(val),
        _ => EnvFilter::builder().parse_lossy(format!("enum_retrofit={level}")),
    }
}

/// Initialise the global subscriber; `verbose` forces `debug`.
/// Calling it twice is harmless, the second call is ignored.
pub fn init_tracing(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = build_filter(level);
    let to_stdout = config.target.eq_ignore_ascii_case("stdout");

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // try_init: tests and embedders may already have a subscriber installed
    let _ = match (LogFormat::parse(&config.format), to_stdout) {
        (LogFormat::Json, true) => builder.json().with_writer(std::io::stdout).try_init(),
        (LogFormat::Json, false) => builder.json().with_writer(std::io::stderr).try_init(),
        (LogFormat::Compact, true) => builder.compact().with_writer(std::io::stdout).try_init(),
        (LogFormat::Compact, false) => builder.compact().with_writer(std::io::stderr).try_init(),
        (LogFormat::Pretty, true) => builder.with_writer(std::io::stdout).try_init(),
        (LogFormat::Pretty, false) => builder.with_writer(std::io::stderr).try_init(),
    };
}
