//! Host integration: frame pacing and log output.

use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::error::{GameError, GameResult};
use crate::formatter::FrameFormatter;

pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`, falling back to `info`.
pub fn init_tracing(ansi: bool) -> GameResult<()> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(ansi).event_format(FrameFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| GameError::Platform(format!("Failed to set tracing subscriber: {e}")))
}
