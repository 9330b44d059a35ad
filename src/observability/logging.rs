//! Structured logging.
//!
//! Diagnostics go to stderr so stdout only carries the transfer result.
//! The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "sol_transfer=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
