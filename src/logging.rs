// src/logging.rs
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const FALLBACK_FILTER: &str = "info";

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| configured_filter(configured));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();
}

// A malformed `log_filter` setting must not keep the dashboard from starting.
fn configured_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}
