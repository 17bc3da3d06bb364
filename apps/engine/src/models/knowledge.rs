//! Knowledge-test results: six fixed areas, each completed or not, scored `[0, 100]`.
//!
//! The engine only reads these to build radar geometry and an area ranking.

use serde::{Deserialize, Serialize};

use crate::matching::normalizer::clamp_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeArea {
    Matematicas,
    MedicoBiologicas,
    IngenieriaTecnologia,
    SocialesHumanisticas,
    ArtesDiseno,
    EconomicasAdministrativas,
}

impl KnowledgeArea {
    pub const ALL: [KnowledgeArea; 6] = [
        KnowledgeArea::Matematicas,
        KnowledgeArea::MedicoBiologicas,
        KnowledgeArea::IngenieriaTecnologia,
        KnowledgeArea::SocialesHumanisticas,
        KnowledgeArea::ArtesDiseno,
        KnowledgeArea::EconomicasAdministrativas,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KnowledgeArea::Matematicas => "Matemáticas",
            KnowledgeArea::MedicoBiologicas => "Médico-Biológicas",
            KnowledgeArea::IngenieriaTecnologia => "Ingeniería y Tecnología",
            KnowledgeArea::SocialesHumanisticas => "Sociales y Humanísticas",
            KnowledgeArea::ArtesDiseno => "Artes y Diseño",
            KnowledgeArea::EconomicasAdministrativas => "Económicas y Administrativas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeAreaResult {
    pub area: KnowledgeArea,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub score: f64,
}

impl KnowledgeAreaResult {
    /// Score as plotted: 0 for an area not yet completed, otherwise clamped to `[0, 100]`.
    pub fn effective_score(&self) -> f64 {
        if self.completed {
            clamp_percent(self.score)
        } else {
            0.0
        }
    }
}

/// A completed knowledge area positioned in the score ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedKnowledgeArea {
    pub area: KnowledgeArea,
    pub score: f64,
    pub rank: usize,
}

/// Canonical six-entry series for the radar projector.
///
/// Always returns every area in fixed order. Areas missing from `results` plot as 0;
/// when an area appears more than once the last entry wins.
pub fn knowledge_series(results: &[KnowledgeAreaResult]) -> Vec<(&'static str, f64)> {
    KnowledgeArea::ALL
        .into_iter()
        .map(|area| {
            let score = results
                .iter()
                .rev()
                .find(|r| r.area == area)
                .map(KnowledgeAreaResult::effective_score)
                .unwrap_or(0.0);
            (area.label(), score)
        })
        .collect()
}

/// Orders completed areas by score, highest first.
///
/// Ties keep the canonical area order. Incomplete areas are left out entirely.
pub fn rank_knowledge_areas(results: &[KnowledgeAreaResult]) -> Vec<RankedKnowledgeArea> {
    let mut completed: Vec<(KnowledgeArea, f64)> = KnowledgeArea::ALL
        .into_iter()
        .filter_map(|area| {
            results
                .iter()
                .rev()
                .find(|r| r.area == area)
                .filter(|r| r.completed)
                .map(|r| (area, r.effective_score()))
        })
        .collect();

    // Stable sort: equal scores stay in canonical order
    completed.sort_by(|a, b| b.1.total_cmp(&a.1));

    completed
        .into_iter()
        .enumerate()
        .map(|(idx, (area, score))| RankedKnowledgeArea {
            area,
            score,
            rank: idx + 1,
        })
        .collect()
}
