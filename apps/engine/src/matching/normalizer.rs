//! ProfileVector normalizer: turns a raw backend map into a valid profile.
//!
//! Never fails: missing, `null`, non-numeric and NaN values become 0, everything else
//! is clamped to `[0, 100]`. Unknown keys are ignored.

use serde_json::{Map, Value};

use crate::models::profile::{Dimension, ProfileVector};

pub const MIN_PERCENT: f64 = 0.0;
pub const MAX_PERCENT: f64 = 100.0;

/// Clamps a percentage into `[0, 100]`, mapping NaN to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        MIN_PERCENT
    } else {
        value.clamp(MIN_PERCENT, MAX_PERCENT)
    }
}

/// Builds a `ProfileVector` from the raw per-dimension map delivered by the data layer.
pub fn normalize(raw: &Map<String, Value>) -> ProfileVector {
    let values = Dimension::ALL.map(|dimension| {
        raw.get(dimension.key())
            .and_then(Value::as_f64)
            .unwrap_or(MIN_PERCENT)
    });

    ProfileVector::from_array(values)
}
