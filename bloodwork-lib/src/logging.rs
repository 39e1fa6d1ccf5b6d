//! Logging setup for the bloodwork tools.
//!
//! Built on `tracing`: a console layer is always installed, and an optional
//! file layer mirrors the same events without ANSI escapes. `RUST_LOG` takes
//! precedence over the configured level when set.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logging configuration.
///
/// ```no_run
/// use bloodwork_lib::LogConfig;
/// use tracing::Level;
///
/// LogConfig::default()
///     .with_level(Level::DEBUG)
///     .with_log_file("logs/bloodwork.log")
///     .init()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Base log level used when `RUST_LOG` is not set.
    pub level: Level,
    /// Optional file sink; console output stays on either way.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: Level::INFO,
            log_file: None,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Install the subscriber for the lifetime of the process.
    ///
    /// Fails if a global subscriber is already set or the log file cannot be
    /// opened. Missing parent directories for the log file are created.
    pub fn init(self) -> Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string().to_lowercase()));

        let console_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed();

        let file_layer = match &self.log_file {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create log directory {}", parent.display())
                    })?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?;
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Arc::new(file))
                        .boxed(),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .context("Logging was already initialized")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_logs_info_to_console_only() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_builder_methods_set_level_and_file() {
        let config = LogConfig::default()
            .with_level(Level::DEBUG)
            .with_log_file("logs/test.log");

        assert_eq!(config.level, Level::DEBUG);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/test.log")));
    }
}
