//! Logging initialization

use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by RUST_LOG.
///
/// Not used for the TUI: writes to stderr would tear the alternate screen.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_writer(io::stderr);

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
