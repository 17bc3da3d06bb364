//! Ikigai zone classification.
//!
//! - IKIGAI: every sub-score meets the threshold
//! - otherwise: the adjacent pair (in the cycle pasión → vocación → profesión → misión →
//!   pasión) with the highest average; exact ties go to the pair listed first

use serde::{Deserialize, Serialize};

use crate::models::career::SubScores;

/// Threshold each sub-score must reach for the centre zone.
pub const DEFAULT_IKIGAI_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IkigaiZone {
    Ikigai,
    PasionVocacion,
    VocacionProfesion,
    ProfesionMision,
    MisionPasion,
}

impl IkigaiZone {
    /// Pair zones in their fixed cyclic order. Index `i` pairs sub-score `i` with `i + 1`.
    pub const PAIRS: [IkigaiZone; 4] = [
        IkigaiZone::PasionVocacion,
        IkigaiZone::VocacionProfesion,
        IkigaiZone::ProfesionMision,
        IkigaiZone::MisionPasion,
    ];

    pub fn description(self) -> &'static str {
        match self {
            IkigaiZone::Ikigai => "You love it, you're good at it, it pays and the world needs it",
            IkigaiZone::PasionVocacion => "You love it and you're good at it",
            IkigaiZone::VocacionProfesion => "You're good at it and it pays",
            IkigaiZone::ProfesionMision => "It pays and the world needs it",
            IkigaiZone::MisionPasion => "The world needs it and you love it",
        }
    }
}

/// Labels a sub-score pattern with exactly one zone. Total: NaN components count as 0.
pub fn classify(sub_scores: &SubScores, threshold: f64) -> IkigaiZone {
    let values = sub_scores.clamped().to_array();

    if values.iter().all(|&v| v >= threshold) {
        return IkigaiZone::Ikigai;
    }

    let mut best = IkigaiZone::PAIRS[0];
    let mut best_avg = f64::NEG_INFINITY;
    for (i, zone) in IkigaiZone::PAIRS.into_iter().enumerate() {
        let avg = (values[i] + values[(i + 1) % values.len()]) / 2.0;
        // strict: an equal later pair never displaces an earlier one
        if avg > best_avg {
            best = zone;
            best_avg = avg;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(p: f64, v: f64, pr: f64, m: f64) -> SubScores {
        SubScores::new(p, v, pr, m)
    }

    #[test]
    fn test_all_above_threshold_is_ikigai() {
        let zone = classify(&scores(80.0, 75.0, 90.0, 71.0), DEFAULT_IKIGAI_THRESHOLD);
        assert_eq!(zone, IkigaiZone::Ikigai);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let zone = classify(&scores(70.0, 70.0, 70.0, 70.0), DEFAULT_IKIGAI_THRESHOLD);
        assert_eq!(zone, IkigaiZone::Ikigai);
    }

    #[test]
    fn test_one_below_threshold_is_not_ikigai() {
        let zone = classify(&scores(95.0, 95.0, 95.0, 69.9), DEFAULT_IKIGAI_THRESHOLD);
        assert_ne!(zone, IkigaiZone::Ikigai);
        assert_eq!(zone, IkigaiZone::PasionVocacion);
    }

    #[test]
    fn test_highest_pair_wins() {
        assert_eq!(
            classify(&scores(90.0, 85.0, 40.0, 30.0), DEFAULT_IKIGAI_THRESHOLD),
            IkigaiZone::PasionVocacion
        );
        assert_eq!(
            classify(&scores(50.0, 55.0, 60.0, 45.0), DEFAULT_IKIGAI_THRESHOLD),
            IkigaiZone::VocacionProfesion
        );
        assert_eq!(
            classify(&scores(10.0, 20.0, 60.0, 65.0), DEFAULT_IKIGAI_THRESHOLD),
            IkigaiZone::ProfesionMision
        );
        assert_eq!(
            classify(&scores(60.0, 10.0, 20.0, 65.0), DEFAULT_IKIGAI_THRESHOLD),
            IkigaiZone::MisionPasion
        );
    }

    #[test]
    fn test_tie_prefers_earlier_pair_in_cycle() {
        // PV = 50, VP = 50, PM = 30, MP = 30
        let zone = classify(&scores(40.0, 60.0, 40.0, 20.0), DEFAULT_IKIGAI_THRESHOLD);
        assert_eq!(zone, IkigaiZone::PasionVocacion);

        // PM = 60 and MP = 60 tie; PM is listed first
        let zone = classify(&scores(60.0, 0.0, 60.0, 60.0), DEFAULT_IKIGAI_THRESHOLD);
        assert_eq!(zone, IkigaiZone::ProfesionMision);
    }

    #[test]
    fn test_all_zero_falls_back_to_first_pair() {
        let zone = classify(&SubScores::default(), DEFAULT_IKIGAI_THRESHOLD);
        assert_eq!(zone, IkigaiZone::PasionVocacion);
    }

    #[test]
    fn test_custom_threshold() {
        let s = scores(55.0, 60.0, 58.0, 52.0);
        assert_eq!(classify(&s, 50.0), IkigaiZone::Ikigai);
        assert_ne!(classify(&s, DEFAULT_IKIGAI_THRESHOLD), IkigaiZone::Ikigai);
    }

    #[test]
    fn test_zone_wire_names() {
        let json = serde_json::to_string(&IkigaiZone::VocacionProfesion).unwrap();
        assert_eq!(json, r#""VOCACION_PROFESION""#);
    }
}
