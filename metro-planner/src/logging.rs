//! Tracing subscriber setup for the server binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` if the variable is unset or cannot be parsed.
/// Returns an error if a global subscriber is already installed.
pub fn init_logger() -> Result<(), tracing_subscriber::util::TryInitError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(build_filter(directives.as_deref(), LevelFilter::INFO))
        .try_init()
}

/// Filter from `directives`, or `fallback` alone if they are absent or invalid.
fn build_filter(directives: Option<&str>, fallback: LevelFilter) -> EnvFilter {
    let Some(directives) = directives else {
        return EnvFilter::new(fallback.to_string());
    };

    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        // No subscriber exists yet, so this cannot go through tracing
        eprintln!(
            "ignoring {}={directives:?} ({err}); logging at {fallback} instead",
            EnvFilter::DEFAULT_ENV,
        );
        EnvFilter::new(fallback.to_string())
    })
}
