//! Tracing setup for terminal applications.
//!
//! A TUI owns the terminal, so log lines must never reach stdout or stderr.
//! [`init_file_logging`] installs a global `tracing` subscriber that appends
//! plain-text events to a file instead.

use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Open a file for appending log output, creating it if needed.
pub fn open_log_file(path: impl AsRef<Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

/// Build the event filter.  `env` (normally the value of `RUST_LOG`) takes
/// precedence over `default_directive`.
pub fn build_filter(
    env: Option<&str>,
    default_directive: &str,
) -> Result<EnvFilter, LoggingError> {
    let directive = env.filter(|s| !s.trim().is_empty()).unwrap_or(default_directive);
    Ok(EnvFilter::try_new(directive)?)
}

/// Install a global subscriber that writes to `path`.
///
/// `RUST_LOG` overrides `default_directive` when set.
///
/// ```rust,ignore
/// tabkit_core::logging::init_file_logging("tabs.log", "tabkit=debug")?;
/// ```
pub fn init_file_logging(
    path: impl AsRef<Path>,
    default_directive: &str,
) -> Result<(), LoggingError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), default_directive)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tabkit-{}-{}", std::process::id(), name))
    }

    #[test]
    fn open_log_file_appends() {
        let path = temp_path("append.log");
        let _ = std::fs::remove_file(&path);

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn filter_prefers_env_value() {
        let filter = build_filter(Some("tabkit=trace"), "warn").unwrap();
        assert_eq!(filter.to_string(), "tabkit=trace");
    }

    #[test]
    fn filter_falls_back_on_blank_env() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn filter_rejects_bad_level() {
        assert!(matches!(
            build_filter(None, "tabkit=loud"),
            Err(LoggingError::Filter(_))
        ));
    }
}
