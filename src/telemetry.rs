use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Called once at startup;
/// `RUST_LOG` wins over the configured default filter.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
