use serde::{Deserialize, Serialize};

use crate::matching::ikigai::IkigaiZone;
use crate::matching::normalizer::clamp_percent;
use crate::models::profile::Dimension;

// ────────────────────────────────────────────────────────────────────────────
// Catalog data
// ────────────────────────────────────────────────────────────────────────────

/// Per-dimension weights a career places on the aptitude profile.
///
/// The scale is defined by the catalog (not necessarily `[0, 100]`), so values are kept
/// exactly as supplied. Dimensions absent from the payload weigh 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementVector {
    pub tecnologico: f64,
    pub cientifico: f64,
    pub salud: f64,
    pub administrativo: f64,
    pub social: f64,
}

impl RequirementVector {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Tecnologico => self.tecnologico,
            Dimension::Cientifico => self.cientifico,
            Dimension::Salud => self.salud,
            Dimension::Administrativo => self.administrativo,
            Dimension::Social => self.social,
        }
    }
}

/// A read-only catalog entry. `requirements` is optional on the wire: a candidate
/// without one is excluded from ranking with a warning rather than failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCandidate {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default)]
    pub requirements: Option<RequirementVector>,
}

impl CareerCandidate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        requirements: RequirementVector,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            requirements: Some(requirements),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Derived results
// ────────────────────────────────────────────────────────────────────────────

/// The four Ikigai sub-scores of one career for one profile, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub pasion: f64,
    pub vocacion: f64,
    pub profesion: f64,
    pub mision: f64,
}

impl SubScores {
    pub fn new(pasion: f64, vocacion: f64, profesion: f64, mision: f64) -> Self {
        Self {
            pasion,
            vocacion,
            profesion,
            mision,
        }
    }

    /// Copy with every component forced into `[0, 100]` (NaN → 0).
    pub fn clamped(self) -> Self {
        Self {
            pasion: clamp_percent(self.pasion),
            vocacion: clamp_percent(self.vocacion),
            profesion: clamp_percent(self.profesion),
            mision: clamp_percent(self.mision),
        }
    }

    /// Total in points: the rounded sum of the four components (0 – 400).
    pub fn total(&self) -> u32 {
        (self.pasion + self.vocacion + self.profesion + self.mision).round() as u32
    }

    /// Components in the fixed cyclic order pasión → vocación → profesión → misión.
    pub fn to_array(&self) -> [f64; 4] {
        [self.pasion, self.vocacion, self.profesion, self.mision]
    }
}

/// A catalog candidate after scoring, classification and sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCareer {
    #[serde(flatten)]
    pub career: CareerCandidate,
    pub sub_scores: SubScores,
    pub total_score: u32, // points, not a percentage
    pub ikigai_zone: IkigaiZone,
    pub rank: usize, // 1-based
}
