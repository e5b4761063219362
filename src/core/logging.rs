use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// the JSON report on stdout stays clean.
pub fn init_logging(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Logging initialized at level: {}", log_level);
}
