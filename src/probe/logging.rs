use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging with configurable log levels
///
/// Log level is controlled via the `RUST_LOG` environment variable.
/// Examples:
/// - `RUST_LOG=debug` - Debug level and above
/// - `RUST_LOG=ioig_diag=debug` - Debug level for this crate only
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false))
        .init();
}
