//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. Quiet for dependencies, verbose for our
/// own crate.
pub fn init_logging() {
    let env_filter = EnvFilter::new("error,ui=debug");

    // Timestamps are unavailable in browsers and ANSI rendering is
    // inconsistent across consoles.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("console logging initialized");
}
