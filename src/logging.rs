use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Installs the global tracing subscriber, logging to stderr.
///
/// An unparsable filter falls back to the default one. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(filter: &str) {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(f) => (f, false),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_FILTER), true),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if rejected {
        tracing::warn!("invalid log filter {filter:?}; using {DEFAULT_LOG_FILTER:?}");
    }
}
