//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Initialize logging. Debug output for the dashboard and the page data
/// loader, errors only for everything else.
pub fn init_logging() {
    let env_filter = EnvFilter::new("error,ui=debug,page_data=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    // A second App mount (e.g. hot reload) must not panic here
    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    tracing::info!("Initialized logs");
}
