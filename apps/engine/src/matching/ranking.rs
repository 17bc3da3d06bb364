//! Career Ranking Engine: scores every catalog candidate against a profile and orders them.
//!
//! Reuses `sub_scores::bounded_sub_scores` for the injected per-career formula and
//! `ikigai::classify` for the zone label. Catalog data is borrowed, never mutated.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::matching::ikigai::classify;
use crate::matching::sub_scores::{bounded_sub_scores, SubScoreStrategy};
use crate::models::career::{CareerCandidate, RankedCareer};
use crate::models::profile::ProfileVector;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A candidate left out of the ranking. Non-fatal: the rest of the catalog still ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedCareer {
    pub career_id: String,
    pub position: usize, // 0-based index in the input catalog
    pub reason: String,
}

/// Result of one ranking invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    pub ranked: Vec<RankedCareer>,
    pub excluded: Vec<ExcludedCareer>,
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores, classifies and ranks the catalog for one profile.
///
/// Algorithm:
/// 1. Exclude candidates with a blank id or no requirement vector (collected as warnings)
/// 2. Compute bounded sub-scores via the strategy; `total_score` = rounded sum in points
/// 3. Classify each candidate's Ikigai zone with `ikigai_threshold`
/// 4. Stable sort descending by `total_score` (ties keep catalog order)
/// 5. Assign `rank = index + 1`
pub fn rank(
    profile: &ProfileVector,
    catalog: &[CareerCandidate],
    strategy: &dyn SubScoreStrategy,
    ikigai_threshold: f64,
) -> RankingOutcome {
    let mut ranked = Vec::with_capacity(catalog.len());
    let mut excluded = Vec::new();

    for (position, career) in catalog.iter().enumerate() {
        let requirements = match (career.id.trim().is_empty(), &career.requirements) {
            (true, _) => {
                excluded.push(exclusion(career, position, "missing career identifier"));
                continue;
            }
            (false, None) => {
                excluded.push(exclusion(career, position, "missing requirement vector"));
                continue;
            }
            (false, Some(requirements)) => requirements,
        };

        let sub_scores = bounded_sub_scores(strategy, profile, requirements);
        ranked.push(RankedCareer {
            career: career.clone(),
            total_score: sub_scores.total(),
            ikigai_zone: classify(&sub_scores, ikigai_threshold),
            sub_scores,
            rank: 0,
        });
    }

    // Vec::sort_by is stable, so equal totals keep catalog order
    ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    for (idx, entry) in ranked.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }

    debug!(
        strategy = strategy.name(),
        candidates = catalog.len(),
        ranked = ranked.len(),
        excluded = excluded.len(),
        "catalog ranked"
    );

    RankingOutcome { ranked, excluded }
}

fn exclusion(career: &CareerCandidate, position: usize, reason: &str) -> ExcludedCareer {
    warn!(
        career_id = %career.id,
        position,
        "excluding career from ranking: {reason}"
    );
    ExcludedCareer {
        career_id: career.id.clone(),
        position,
        reason: reason.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
