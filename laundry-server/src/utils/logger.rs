//! Logging Infrastructure
//!
//! `tracing-subscriber` with an `EnvFilter`; optional daily rolling file
//! output through `tracing-appender`.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor an explicit level is given
pub const DEFAULT_FILTER: &str = "laundry_server=info,tower_http=info";

/// Build the filter: `RUST_LOG` wins, then `log_level`, then [`DEFAULT_FILTER`]
pub fn build_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match log_level {
        Some(level) => EnvFilter::new(format!("laundry_server={level},tower_http={level}")),
        None => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Initialize the logger with optional file output
///
/// Falls back to stdout when `log_dir` cannot be created. Safe to call more
/// than once; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "laundry-server");
            let _ = subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init();
            return;
        }
        eprintln!("Cannot create log directory {dir}, logging to stdout");
    }

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_with_level() {
        // SAFETY: tests in this module do not read RUST_LOG concurrently
        unsafe { std::env::remove_var("RUST_LOG") };
        let filter = build_filter(Some("debug"));
        assert!(filter.to_string().contains("laundry_server=debug"));
    }

    #[test]
    fn test_init_with_file_writes_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        init_logger_with_file(Some("info"), logs.to_str());
        assert!(logs.exists());
    }
}
