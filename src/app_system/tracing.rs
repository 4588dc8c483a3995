/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info` when the
/// variable is missing or unparsable. Call once per process.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
