//! `tracing` subscriber setup.
//!
//! Filter precedence: `--log-level`, then `RUST_LOG`, then `logging.level`.
//! Console logs go to stderr so command output on stdout stays clean.

use anyhow::Result;
use cosmo_core::config::DEFAULT_LOG_LEVEL;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::AppContext;

const LOG_FILE_PREFIX: &str = "cosmocart.log";

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process, or buffered file logs are lost.
pub fn init(ctx: &AppContext, cli_level: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(cli_level, std::env::var("RUST_LOG").ok(), &ctx.config.logging.level);

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = if ctx.config.logging.file {
        let appender = tracing_appender::rolling::daily(ctx.paths.logs_dir(), LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn build_filter(cli_level: Option<&str>, rust_log: Option<String>, configured: &str) -> EnvFilter {
    cli_level
        .map(str::to_string)
        .or(rust_log)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
