//! Logging and tracing setup for Beacon.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads log level from RUST_LOG environment variable. Without RUST_LOG,
/// defaults to `beacon=info,tower_http=info`, or the `debug` level for both
/// targets when debug mode is enabled.
pub fn init(debug: bool) {
    let default_filter = if debug {
        "beacon=debug,tower_http=debug"
    } else {
        "beacon=info,tower_http=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
