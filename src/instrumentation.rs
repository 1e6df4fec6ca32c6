//! Tracing setup for builds with the `instrumentation` feature.
//!
//! Search entry points carry `tracing` spans in those builds; this installs
//! the subscriber that reports them.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber in place of `env_logger`.
///
/// Respects RUST_LOG environment variable:
/// - "off" or unset: only warnings are printed
/// - Any other value: span close events, with their timings, are printed too
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "off".to_string());

    let result = if env_filter == "off" || env_filter.is_empty() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("warn"))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .compact()
            .try_init()
    };

    if let Err(error) = result {
        eprintln!("failed to set tracing subscriber: {}", error);
    }
}
