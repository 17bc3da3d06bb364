//! Vocational Matching Engine.
//!
//! Turns a user's five aptitude percentages into a ranked, Ikigai-classified list of
//! careers, and turns any named percentage vector into radar chart geometry.
//! Every operation is a pure, synchronous function over already-fetched inputs.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod matching;
pub mod models;
pub mod radar;
pub mod sequence;
pub mod telemetry;

// Re-export the public API consumed by the presentation and data layers.
pub use config::EngineConfig;
pub use engine::{MatchingEngine, VocationalReport};
pub use errors::EngineError;
pub use matching::ikigai::{classify, IkigaiZone, DEFAULT_IKIGAI_THRESHOLD};
pub use matching::normalizer::normalize;
pub use matching::ranking::{rank, ExcludedCareer, RankingOutcome};
pub use matching::selector::select_top;
pub use matching::sub_scores::SubScoreStrategy;
pub use models::career::{CareerCandidate, RankedCareer, RequirementVector, SubScores};
pub use models::knowledge::{KnowledgeArea, KnowledgeAreaResult};
pub use models::profile::{Dimension, ProfileVector};
pub use radar::geometry::{project, Point, RadarConfig, RadarGeometry};
pub use sequence::{LatestResult, SequenceGuard};
