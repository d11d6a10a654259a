//! File-based logging for the terminal client.
//!
//! The TUI owns stdout/stderr, so logs go to a file only:
//! `<cache dir>/logs/<session>/client.log`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file name inside the session directory.
pub const LOG_FILE_NAME: &str = "client.log";

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global tracing subscriber writing to a session log file.
///
/// `log_dir` overrides the platform cache directory. The returned guard
/// flushes pending lines on drop and must be held for the program's lifetime.
///
/// Filtering follows `RUST_LOG`, defaulting to INFO.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let session = session_name();
    let session_log_dir = session_directory(log_dir, &session)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session);
    tracing::info!(
        "Log file: {}",
        session_log_dir.join(LOG_FILE_NAME).display()
    );

    Ok(guard)
}

/// Filter from `RUST_LOG`-style directives, falling back to [`DEFAULT_LOG_FILTER`].
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Create (if needed) and return the directory for this session's log.
pub fn session_directory(log_dir: Option<&Path>, session: &str) -> Result<PathBuf> {
    let base = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_directory(),
    };

    let session_log_dir = base.join(session);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    Ok(session_log_dir)
}

/// Platform cache directory for logs, falling back to the temp directory.
pub fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "player-inventory")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("player-inventory").join("logs"))
}

fn session_name() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_directory_is_created_under_override() {
        let tmp = tempfile::tempdir().unwrap();

        let dir = session_directory(Some(tmp.path()), "session_1").unwrap();

        assert_eq!(dir, tmp.path().join("session_1"));
        assert!(dir.is_dir());
    }

    #[test]
    fn rust_log_level_is_kept() {
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
        assert_eq!(
            build_filter(Some("player_data=trace")).to_string(),
            "player_data=trace"
        );
    }

    #[test]
    fn missing_or_invalid_rust_log_defaults_to_info() {
        assert_eq!(build_filter(None).to_string(), "info");
        assert_eq!(build_filter(Some("player_data=verbose")).to_string(), "info");
    }

    #[test]
    fn session_names_are_prefixed() {
        assert!(session_name().starts_with("session_"));
    }
}
