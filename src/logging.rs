use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "tagit=debug"
    } else {
        "tagit=warn"
    }
}

/// Initialize stderr logging. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(env_filter)
        .try_init();
}
