//! Tracing initialization.
//!
//! Logs go to stderr so the process never interleaves diagnostics with
//! anything a caller might pipe from stdout.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const TRACING_TARGET_CLI: &str = "csv2graph::cli";
pub const TRACING_TARGET_LOADER: &str = "csv2graph::loader";
pub const TRACING_TARGET_NORMALIZE: &str = "csv2graph::normalize";
pub const TRACING_TARGET_WRITER: &str = "csv2graph::writer";

/// Filter used when `RUST_LOG` is unset: a clean run prints nothing, while
/// failures still surface as ERROR events.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Initializes the tracing subscriber.
///
/// Diagnostics only: the filter never changes what gets converted.
///
/// ```bash
/// RUST_LOG=csv2graph::normalize=debug csv2graph nodes.csv edges.csv out.json
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = create_env_filter()?;

    tracing_subscriber::registry()
        .with(create_fmt_layer())
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(())
}

fn create_env_filter() -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))
}

fn create_fmt_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
}
