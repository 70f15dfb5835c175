//! Tracing setup.
//!
//! Log output goes to stdout next to the summary, since CI logs only
//! capture what the step prints.

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. `level` is an `EnvFilter` directive;
/// an invalid directive falls back to `info`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
