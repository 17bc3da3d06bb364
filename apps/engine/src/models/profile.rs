use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::matching::normalizer::{clamp_percent, normalize};

// ────────────────────────────────────────────────────────────────────────────
// Aptitude dimensions
// ────────────────────────────────────────────────────────────────────────────

/// The five fixed aptitude dimensions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Tecnologico,
    Cientifico,
    Salud,
    Administrativo,
    Social,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Tecnologico,
        Dimension::Cientifico,
        Dimension::Salud,
        Dimension::Administrativo,
        Dimension::Social,
    ];

    /// Wire key used by the test-scoring backend.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Tecnologico => "tecnologico",
            Dimension::Cientifico => "cientifico",
            Dimension::Salud => "salud",
            Dimension::Administrativo => "administrativo",
            Dimension::Social => "social",
        }
    }

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Tecnologico => "Tecnológico",
            Dimension::Cientifico => "Científico",
            Dimension::Salud => "Salud",
            Dimension::Administrativo => "Administrativo",
            Dimension::Social => "Social",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ProfileVector
// ────────────────────────────────────────────────────────────────────────────

/// A user's aptitude profile: one percentage in `[0, 100]` per dimension.
///
/// Immutable once built. Every constructor clamps, so a `ProfileVector` can never hold
/// an out-of-range or NaN value. Deserializing goes through [`normalize`], which makes
/// decoding a raw backend map total as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ProfileVector {
    tecnologico: f64,
    cientifico: f64,
    salud: f64,
    administrativo: f64,
    social: f64,
}

impl ProfileVector {
    pub fn new(
        tecnologico: f64,
        cientifico: f64,
        salud: f64,
        administrativo: f64,
        social: f64,
    ) -> Self {
        Self::from_array([tecnologico, cientifico, salud, administrativo, social])
    }

    /// Builds a profile from values in canonical dimension order.
    pub fn from_array(values: [f64; 5]) -> Self {
        let [tecnologico, cientifico, salud, administrativo, social] = values.map(clamp_percent);
        Self {
            tecnologico,
            cientifico,
            salud,
            administrativo,
            social,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.to_array()[dimension.index()]
    }

    pub fn to_array(&self) -> [f64; 5] {
        [
            self.tecnologico,
            self.cientifico,
            self.salud,
            self.administrativo,
            self.social,
        ]
    }

    /// Iterates `(dimension, percentage)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Mean of the five percentages, rounded to one decimal.
    pub fn average(&self) -> f64 {
        let mean = self.to_array().iter().sum::<f64>() / Dimension::ALL.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Highest-scoring dimension. Ties resolve to the earliest dimension in canonical order.
    pub fn strongest(&self) -> Dimension {
        self.iter()
            .fold((Dimension::Tecnologico, f64::MIN), |best, (d, v)| {
                if v > best.1 {
                    (d, v)
                } else {
                    best
                }
            })
            .0
    }

    /// Labelled series for the radar projector.
    pub fn to_series(&self) -> Vec<(&'static str, f64)> {
        self.iter().map(|(d, v)| (d.label(), v)).collect()
    }
}

impl From<Map<String, Value>> for ProfileVector {
    fn from(raw: Map<String, Value>) -> Self {
        normalize(&raw)
    }
}
