//! Global `tracing` subscriber for the service.

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

use crate::config::{LogFormat, ServiceConfig};

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` filter syntax is honoured; an unparseable filter falls back to
/// `info`. Fails if a subscriber is already installed.
pub fn init_logging(config: &ServiceConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry.with(fmt::layer().pretty()).try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().flatten_event(true).with_current_span(false))
            .try_init()?,
    }

    tracing::info!(
        service = %config.service_name,
        format = ?config.log_format,
        "logging initialised"
    );
    Ok(())
}
