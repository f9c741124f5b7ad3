use tracing_subscriber::EnvFilter;

/// Install the stdout tracing subscriber used by the generator binaries.
///
/// Honors `RUST_LOG` when set, defaults to `info`. Diagnostics go through
/// tracing; the benchmark tables themselves are printed to stdout directly.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}
