//! Logging setup for the operator binary
//!
//! Filtering follows `RUST_LOG` (default `info`); output is text unless
//! `LOG_FORMAT=json`.

use crate::config::OperatorConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
pub fn init_tracing(config: &OperatorConfig) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // Logs go to stderr so command output on stdout stays machine readable.
    if config.json_logs() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!(log_format = %config.log_format, "Tracing initialized");
}
