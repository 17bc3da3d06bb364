use thiserror::Error;

/// Errors raised at the edges of the engine (configuration, payload decoding, telemetry).
///
/// The matching, classification and geometry operations themselves are total and never
/// return this type: malformed input is defaulted or clamped instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog payload error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
