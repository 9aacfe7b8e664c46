//! Structured logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured `server.log_level`
//! directive is used. Production emits JSON lines, other environments the
//! human-readable format.

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Build the log filter for the given server configuration.
pub fn env_filter(server: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level))
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber was already installed.
pub fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = env_filter(server);

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    }
}
