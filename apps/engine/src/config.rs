use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::matching::ikigai::DEFAULT_IKIGAI_THRESHOLD;
use crate::radar::geometry::{Point, RadarConfig};

/// Engine configuration. Every field has a default; environment variables override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Careers returned in a report.
    pub top_n: usize,
    pub ikigai_threshold: f64,
    pub radar: RadarConfig,
    pub rust_log: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            ikigai_threshold: DEFAULT_IKIGAI_THRESHOLD,
            radar: RadarConfig::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        let config = EngineConfig {
            top_n: parse_env("TOP_N", defaults.top_n)?,
            ikigai_threshold: parse_env("IKIGAI_THRESHOLD", defaults.ikigai_threshold)?,
            radar: RadarConfig {
                outer_radius: parse_env("RADAR_OUTER_RADIUS", defaults.radar.outer_radius)?,
                ring_count: parse_env("RADAR_RING_COUNT", defaults.radar.ring_count)?,
                center: Point::new(
                    parse_env("RADAR_CENTER_X", defaults.radar.center.x)?,
                    parse_env("RADAR_CENTER_Y", defaults.radar.center.y)?,
                ),
                label_offset: parse_env("RADAR_LABEL_OFFSET", defaults.radar.label_offset)?,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects values the geometry and classifier cannot use meaningfully.
    pub fn validate(&self) -> Result<(), EngineError> {
        let radar = &self.radar;
        if !radar.outer_radius.is_finite() || radar.outer_radius <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "outer_radius must be a positive number, got {}",
                radar.outer_radius
            )));
        }
        if !radar.label_offset.is_finite() || radar.label_offset < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "label_offset must be a non-negative number, got {}",
                radar.label_offset
            )));
        }
        if !radar.center.x.is_finite() || !radar.center.y.is_finite() {
            return Err(EngineError::InvalidConfig(
                "radar center must have finite coordinates".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.ikigai_threshold) {
            return Err(EngineError::InvalidConfig(format!(
                "ikigai_threshold must be within [0, 100], got {}",
                self.ikigai_threshold
            )));
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
