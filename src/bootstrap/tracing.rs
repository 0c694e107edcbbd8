//! Tracing configuration for igloo-sync
//!
//! stdout carries the JSON protocol, so human-readable logs go to stderr and,
//! when a log directory is available, to a daily-rolling file.

use std::path::PathBuf;
use std::{fs, io, sync::OnceLock};

use ig_core::AppConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "igloo-sync.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when neither `RUST_LOG` nor the config sets one.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("ig_app={level}"),
        format!("ig_infra={level}"),
        "ig_core=info".to_string(),
    ]
}

/// `RUST_LOG` wins, then the config's `[logging] filter`, then the defaults.
fn build_env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.log_filter.trim().is_empty() {
            EnvFilter::new(build_filter_directives(is_development()).join(","))
        } else {
            EnvFilter::new(config.log_filter.trim())
        }
    })
}

fn resolve_log_dir(config: &AppConfig) -> Option<PathBuf> {
    if !config.log_dir.as_os_str().is_empty() {
        return Some(config.log_dir.clone());
    }
    dirs::data_local_dir().map(|dir| dir.join("igloo-sync").join("logs"))
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Fails if a subscriber is already registered. A log file that cannot be
/// opened is not an error; logging falls back to stderr only.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(config);

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer(config) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(config: &AppConfig) -> anyhow::Result<NonBlocking> {
    let logs_dir =
        resolve_log_dir(config).ok_or_else(|| anyhow::anyhow!("no log directory available"))?;
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"ig_app=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"ig_infra=info".to_string()));
    }

    #[test]
    fn test_configured_log_dir_wins() {
        let mut config = AppConfig::empty();
        config.log_dir = PathBuf::from("/tmp/igloo-logs");

        assert_eq!(resolve_log_dir(&config), Some(PathBuf::from("/tmp/igloo-logs")));
    }
}
