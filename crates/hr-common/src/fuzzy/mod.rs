pub mod membership;
pub mod rules;

pub use membership::{
    fuzzify, Bounds, Membership, INTERVIEW_BOUNDS, SOFT_SKILLS_BOUNDS, TEST_BOUNDS,
};
pub use rules::{combine, defuzzify};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full audit breakdown of one fuzzy evaluation, kept for display alongside
/// the final score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzyBreakdown {
    pub test: Membership,
    pub skills: Membership,
    pub interview: Membership,
    pub rules: Membership,
}

/// Result of scoring one applicant's raw criterion values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyScore {
    /// Defuzzified selection score in [0, 1].
    pub final_score: f64,
    pub details: FuzzyBreakdown,
}

/// Scores the three raw criterion values of one applicant.
///
/// Out-of-range inputs saturate at the criterion bounds; scoring never
/// fails.
pub fn score(test: f64, soft_skills: f64, interview: f64) -> FuzzyScore {
    let test_m = fuzzify(test, TEST_BOUNDS);
    let skills_m = fuzzify(soft_skills, SOFT_SKILLS_BOUNDS);
    let interview_m = fuzzify(interview, INTERVIEW_BOUNDS);

    let rules = combine(test_m, skills_m, interview_m);
    let final_score = defuzzify(rules);

    debug!(
        test,
        soft_skills,
        interview,
        rules_low = rules.low,
        rules_medium = rules.medium,
        rules_high = rules.high,
        final_score,
        "fuzzy evaluation"
    );

    FuzzyScore {
        final_score,
        details: FuzzyBreakdown {
            test: test_m,
            skills: skills_m,
            interview: interview_m,
            rules,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_worked_example() {
        let scored = score(95.0, 40.0, 50.0);

        assert!((scored.details.test.medium - 0.1).abs() < 1e-12);
        assert!((scored.details.test.high - 0.9).abs() < 1e-12);
        assert!((scored.details.skills.low - 0.5).abs() < 1e-12);
        assert!((scored.details.interview.medium - 1.0).abs() < 1e-12);

        assert_eq!(scored.details.rules.low, 0.0);
        assert!((scored.details.rules.medium - 0.5).abs() < 1e-12);
        assert_eq!(scored.details.rules.high, 0.0);

        assert!((scored.final_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn final_score_stays_in_unit_interval() {
        for test in [0.0, 20.0, 55.0, 80.0, 100.0] {
            for skills in [0.0, 30.0, 60.0, 100.0] {
                for interview in [0.0, 25.0, 50.0, 100.0] {
                    let scored = score(test, skills, interview);
                    assert!(
                        (0.0..=1.0).contains(&scored.final_score),
                        "score {} for ({test}, {skills}, {interview})",
                        scored.final_score
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_inputs_are_clamped_not_rejected() {
        let clamped = score(-20.0, 130.0, 45.0);
        let saturated = score(0.0, 100.0, 45.0);

        assert_eq!(clamped.final_score, saturated.final_score);
        assert_eq!(clamped.details, saturated.details);
    }
}
