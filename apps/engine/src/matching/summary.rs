//! Vocational summary, the compact "vocational result" record kept in a results history.
//! Holds the general average, the Ikigai zone of the best match and the top career names.

use serde::{Deserialize, Serialize};

use crate::matching::ikigai::IkigaiZone;
use crate::matching::selector::select_top;
use crate::models::career::RankedCareer;
use crate::models::profile::{Dimension, ProfileVector};

/// Careers listed by name in a summary.
pub const SUMMARY_CAREER_COUNT: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocationalSummary {
    pub general_average: f64,
    pub strongest_dimension: Dimension,
    /// Zone of the rank-1 career; `None` when nothing was ranked.
    pub ikigai_zone: Option<IkigaiZone>,
    pub top_careers: Vec<String>,
}

pub fn summarize(profile: &ProfileVector, ranked: &[RankedCareer]) -> VocationalSummary {
    VocationalSummary {
        general_average: profile.average(),
        strongest_dimension: profile.strongest(),
        ikigai_zone: ranked.first().map(|r| r.ikigai_zone),
        top_careers: select_top(ranked, SUMMARY_CAREER_COUNT)
            .into_iter()
            .map(|r| r.career.name)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::{CareerCandidate, RequirementVector, SubScores};

    fn make_ranked(name: &str, rank: usize, zone: IkigaiZone) -> RankedCareer {
        RankedCareer {
            career: CareerCandidate::new(name.to_lowercase(), name, RequirementVector::default()),
            sub_scores: SubScores::default(),
            total_score: 0,
            ikigai_zone: zone,
            rank,
        }
    }

    #[test]
    fn test_summary_lists_first_three_careers() {
        let ranked = vec![
            make_ranked("Software", 1, IkigaiZone::PasionVocacion),
            make_ranked("Medicina", 2, IkigaiZone::MisionPasion),
            make_ranked("Derecho", 3, IkigaiZone::ProfesionMision),
            make_ranked("Arte", 4, IkigaiZone::MisionPasion),
        ];
        let profile = ProfileVector::new(80.0, 60.0, 20.0, 10.0, 30.0);
        let summary = summarize(&profile, &ranked);

        assert_eq!(summary.top_careers, vec!["Software", "Medicina", "Derecho"]);
        assert_eq!(summary.ikigai_zone, Some(IkigaiZone::PasionVocacion));
        assert_eq!(summary.general_average, 40.0);
        assert_eq!(summary.strongest_dimension, Dimension::Tecnologico);
    }

    #[test]
    fn test_summary_without_ranked_careers() {
        let profile = ProfileVector::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let summary = summarize(&profile, &[]);
        assert!(summary.top_careers.is_empty());
        assert_eq!(summary.ikigai_zone, None);
    }
}
