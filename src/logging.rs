// src/logging.rs
// =============================================================================
// Log output for the binary.
//
// The library only emits `tracing` events; installing a subscriber is left
// to whoever runs it. The CLI calls `init_logging` once at startup.
//
// Logs go to stderr so `--json` output on stdout stays machine-readable.
// When RUST_LOG is set it replaces the defaults entirely (and --verbose is
// ignored), e.g. RUST_LOG=page_crawler=trace.
// =============================================================================

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = match std::env::var_os(EnvFilter::DEFAULT_ENV) {
        Some(_) => EnvFilter::try_from_default_env()?,
        None => EnvFilter::try_new(default_directives(verbose))?,
    };

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

// Filter used when RUST_LOG is not set
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,page_crawler={}", level)
}
