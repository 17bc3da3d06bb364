use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EngineConfig;
use crate::errors::EngineError;

/// Installs the global structured-logging subscriber for a host application.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `config.rust_log`.
/// Calling this twice returns `EngineError::Telemetry` instead of panicking.
pub fn init_tracing(config: &EngineConfig) -> Result<(), EngineError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("vocational_engine={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| EngineError::Telemetry(e.to_string()))?;

    tracing::info!("Vocational engine v{} logging initialised", env!("CARGO_PKG_VERSION"));
    Ok(())
}
