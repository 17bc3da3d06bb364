use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::matching::normalizer::normalize;
use crate::matching::ranking::{rank, ExcludedCareer};
use crate::matching::selector::select_top;
use crate::matching::sub_scores::SubScoreStrategy;
use crate::matching::summary::{summarize, VocationalSummary};
use crate::models::career::{CareerCandidate, RankedCareer};
use crate::models::knowledge::{
    knowledge_series, rank_knowledge_areas, KnowledgeAreaResult, RankedKnowledgeArea,
};
use crate::models::profile::ProfileVector;
use crate::radar::geometry::{project, RadarGeometry};

/// Output of one full matching run for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocationalReport {
    pub profile: ProfileVector,
    /// Top `top_n` careers, best first.
    pub careers: Vec<RankedCareer>,
    /// Catalog entries that could not be ranked.
    pub warnings: Vec<ExcludedCareer>,
    pub summary: VocationalSummary,
    pub strategy: String, // sub-score strategy name, for transparency
}

/// Entry point for callers: configuration plus the injected sub-score strategy.
///
/// Cheap to clone and safe to share across threads; it holds no per-user state.
#[derive(Clone)]
pub struct MatchingEngine {
    config: EngineConfig,
    strategy: Arc<dyn SubScoreStrategy>,
}

impl MatchingEngine {
    pub fn new(
        config: EngineConfig,
        strategy: Arc<dyn SubScoreStrategy>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config, strategy })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full pipeline: normalize → rank → select top N → summarise.
    pub fn evaluate(
        &self,
        raw_profile: &Map<String, Value>,
        catalog: &[CareerCandidate],
    ) -> VocationalReport {
        self.evaluate_profile(normalize(raw_profile), catalog)
    }

    /// Same as [`evaluate`](Self::evaluate) for an already-normalized profile.
    pub fn evaluate_profile(
        &self,
        profile: ProfileVector,
        catalog: &[CareerCandidate],
    ) -> VocationalReport {
        let outcome = rank(
            &profile,
            catalog,
            self.strategy.as_ref(),
            self.config.ikigai_threshold,
        );
        let top_n = i64::try_from(self.config.top_n).unwrap_or(i64::MAX);
        let careers = select_top(&outcome.ranked, top_n);

        VocationalReport {
            summary: summarize(&profile, &outcome.ranked),
            profile,
            careers,
            warnings: outcome.excluded,
            strategy: self.strategy.name().to_string(),
        }
    }

    /// Radar geometry of the five-dimension aptitude profile.
    pub fn profile_radar(&self, profile: &ProfileVector) -> RadarGeometry {
        project(&profile.to_series(), &self.config.radar)
    }

    /// Radar geometry of the six knowledge areas (always six axes).
    pub fn knowledge_radar(&self, results: &[KnowledgeAreaResult]) -> RadarGeometry {
        project(&knowledge_series(results), &self.config.radar)
    }

    /// Completed knowledge areas, best first, cut to `top_n`.
    pub fn top_knowledge_areas(
        &self,
        results: &[KnowledgeAreaResult],
    ) -> Vec<RankedKnowledgeArea> {
        let top_n = i64::try_from(self.config.top_n).unwrap_or(i64::MAX);
        select_top(&rank_knowledge_areas(results), top_n)
    }
}
