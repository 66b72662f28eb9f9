//! Logging setup for the CLI.
//!
//! Human-readable logs always go to stderr. When a log file is configured,
//! the same events are also written there as JSON lines through a
//! non-blocking appender whose guard must outlive `main`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// File name used inside a log directory.
const LOG_FILE_PREFIX: &str = "shortnames.log";

/// Where file logs should go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path (`SHORTNAMES_LOG_PATH`), never rotated.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `SHORTNAMES_LOG_PATH` and `SHORTNAMES_LOG_DIR`, falling back to
    /// the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_values(
            std::env::var_os("SHORTNAMES_LOG_PATH").map(PathBuf::from),
            std::env::var_os("SHORTNAMES_LOG_DIR").map(PathBuf::from),
            config_log_dir,
        )
    }

    fn from_values(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path.filter(|p| !p.as_os_str().is_empty()),
            log_dir: env_dir
                .filter(|p| !p.as_os_str().is_empty())
                .or(config_log_dir),
        }
    }

    fn appender(&self) -> anyhow::Result<Option<RollingFileAppender>> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            create_dir(dir)?;
            return Ok(Some(rolling::never(dir, file_name)));
        }
        if let Some(ref dir) = self.log_dir {
            create_dir(dir)?;
            return Ok(Some(rolling::daily(dir, LOG_FILE_PREFIX)));
        }
        Ok(None)
    }
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

/// Build the log filter.
///
/// `--quiet` and `-v` win over `RUST_LOG`, which wins over the configured
/// level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let forced = if quiet {
        Some("error")
    } else {
        match verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    };

    match forced {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    }
}

/// Install the global subscriber.
///
/// Returns the file appender's guard when file logging is enabled; dropping
/// it flushes pending events.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.appender()? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_path_takes_priority_over_config_dir() {
        let config = ObservabilityConfig::from_values(
            Some(PathBuf::from("/tmp/x/names.log")),
            None,
            Some(PathBuf::from("/var/log/shortnames")),
        );
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/x/names.log")));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/shortnames")));
    }

    #[test]
    fn env_dir_overrides_config_dir() {
        let config = ObservabilityConfig::from_values(
            None,
            Some(PathBuf::from("/tmp/env-logs")),
            Some(PathBuf::from("/tmp/config-logs")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/env-logs")));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = ObservabilityConfig::from_values(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/tmp/config-logs")),
        );
        assert!(config.log_path.is_none());
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/config-logs")));
    }

    #[test]
    fn no_file_logging_by_default() {
        let config = ObservabilityConfig::default();
        assert!(config.appender().unwrap().is_none());
    }

    #[test]
    fn flags_override_default_level() {
        assert_eq!(env_filter(true, 3, "info").to_string(), "error");
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "info").to_string(), "trace");
    }
}
