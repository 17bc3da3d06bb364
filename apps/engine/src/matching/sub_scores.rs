//! Sub-Score Strategy: pluggable computation of the four Ikigai sub-scores.
//!
//! The weighting that turns a profile and a requirement vector into pasión / vocación /
//! profesión / misión is product-defined and lives outside the engine. Callers inject it
//! as a `SubScoreStrategy`; any `Fn(&ProfileVector, &RequirementVector) -> SubScores`
//! closure qualifies.
//!
//! `MatchingEngine` holds an `Arc<dyn SubScoreStrategy>`, swapped at construction.

use crate::models::career::{RequirementVector, SubScores};
use crate::models::profile::ProfileVector;

/// Computes the four sub-scores of one career for one profile.
///
/// Implementations must be pure and deterministic. Output is clamped to `[0, 100]` by
/// [`bounded_sub_scores`] before the ranking engine uses it, so a strategy that drifts
/// out of range cannot break the ranking invariants.
pub trait SubScoreStrategy: Send + Sync {
    /// Short identifier surfaced in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }

    fn score(&self, profile: &ProfileVector, requirements: &RequirementVector) -> SubScores;
}

impl<F> SubScoreStrategy for F
where
    F: Fn(&ProfileVector, &RequirementVector) -> SubScores + Send + Sync,
{
    fn score(&self, profile: &ProfileVector, requirements: &RequirementVector) -> SubScores {
        self(profile, requirements)
    }
}

/// Runs the strategy and forces its output into range.
pub fn bounded_sub_scores(
    strategy: &dyn SubScoreStrategy,
    profile: &ProfileVector,
    requirements: &RequirementVector,
) -> SubScores {
    let raw = strategy.score(profile, requirements);
    let bounded = raw.clamped();
    if bounded != raw {
        tracing::debug!(
            strategy = strategy.name(),
            ?raw,
            "sub-score strategy returned out-of-range values; clamped"
        );
    }
    bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(SubScores);

    impl SubScoreStrategy for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn score(&self, _profile: &ProfileVector, _requirements: &RequirementVector) -> SubScores {
            self.0
        }
    }

    #[test]
    fn test_closure_is_a_strategy() {
        let strategy = |p: &ProfileVector, _r: &RequirementVector| {
            let v = p.average();
            SubScores::new(v, v, v, v)
        };
        let profile = ProfileVector::new(50.0, 50.0, 50.0, 50.0, 50.0);
        let s = bounded_sub_scores(&strategy, &profile, &RequirementVector::default());
        assert_eq!(s, SubScores::new(50.0, 50.0, 50.0, 50.0));
        assert_eq!(strategy.name(), "custom");
    }

    #[test]
    fn test_out_of_range_output_is_clamped() {
        let strategy = Constant(SubScores::new(130.0, -1.0, f64::NAN, 42.0));
        let profile = ProfileVector::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let s = bounded_sub_scores(&strategy, &profile, &RequirementVector::default());
        assert_eq!(s, SubScores::new(100.0, 0.0, 0.0, 42.0));
    }
}
