//! Subscriber setup: a stderr layer, plus a file layer when configured.

use color_eyre::eyre::{Result, WrapErr};
use lvars_core::config::types::LoggingConfig;
use std::fs::{self, File};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped, so callers keep
/// it alive for as long as they log. `RUST_LOG` directives take precedence
/// over the configured levels.
pub fn init(cfg: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(level_or(&cfg.level, LevelFilter::WARN)));

    let Some(path) = &cfg.file else {
        tracing_subscriber::registry().with(stderr_layer).try_init()?;
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .wrap_err_with(|| format!("creating log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_level = level_or(cfg.file_level.as_deref().unwrap_or(&cfg.level), LevelFilter::DEBUG);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter(file_level));

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).try_init()?;
    Ok(Some(guard))
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

/// Unknown level names fall back to `fallback` rather than failing startup.
fn level_or(s: &str, fallback: LevelFilter) -> LevelFilter {
    s.parse::<LevelFilter>().unwrap_or(fallback)
}
