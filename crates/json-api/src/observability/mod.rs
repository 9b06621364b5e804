//! Logging and metrics setup.

use thiserror::Error;

mod logging;
mod metrics;

pub(crate) use metrics::{metrics_handler, orders_placed_inc, track_requests};

use crate::config::logging::LoggingConfig;

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialise the tracing subscriber from logging config.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    logging::init_subscriber(config)?;

    Ok(())
}
