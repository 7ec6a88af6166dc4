pub mod api;
pub mod db;
pub mod fuzzy;
pub mod logging;
pub mod notify;
pub mod ranking;
pub mod run_id;

use fuzzy::FuzzyBreakdown;

// Commonly used data models for ranking functions.

/// Raw applicant row as yielded by the candidate source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantRecord {
    pub applicant_id: i64,
    pub full_name: String,
    pub test: f64,
    pub soft_skills: f64,
    pub interview: f64,
}

/// A fully scored member of a ranking population.
///
/// Candidates are immutable value records: the generational loop never edits
/// one in place, it evaluates fresh ones. Identity is optional because
/// synthesized children carry none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub applicant_id: Option<i64>,
    pub full_name: Option<String>,
    pub test: f64,
    pub soft_skills: f64,
    pub interview: f64,
    /// Raw criterion sum; always recomputed, never stored independently.
    pub total_score: f64,
    /// Defuzzified selection score in [0, 1].
    pub final_score: f64,
    pub details: FuzzyBreakdown,
}

impl Candidate {
    /// Evaluates raw criterion scores into a candidate, deriving
    /// `total_score`, `final_score` and the audit breakdown.
    pub fn evaluate(
        applicant_id: Option<i64>,
        full_name: Option<String>,
        test: f64,
        soft_skills: f64,
        interview: f64,
    ) -> Self {
        let scored = fuzzy::score(test, soft_skills, interview);

        Self {
            applicant_id,
            full_name,
            test,
            soft_skills,
            interview,
            total_score: test + soft_skills + interview,
            final_score: scored.final_score,
            details: scored.details,
        }
    }

    pub fn from_record(record: &ApplicantRecord) -> Self {
        Self::evaluate(
            Some(record.applicant_id),
            Some(record.full_name.clone()),
            record.test,
            record.soft_skills,
            record.interview,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_derives_total_and_final_score() {
        let candidate = Candidate::evaluate(Some(1), Some("A".into()), 95.0, 40.0, 50.0);

        assert_eq!(candidate.total_score, 185.0);
        assert!((candidate.final_score - 0.5).abs() < 1e-12);
        assert_eq!(candidate.applicant_id, Some(1));
    }

    #[test]
    fn from_record_keeps_identity() {
        let record = ApplicantRecord {
            applicant_id: 42,
            full_name: "Siti Rahma".into(),
            test: 70.0,
            soft_skills: 65.0,
            interview: 80.0,
        };

        let candidate = Candidate::from_record(&record);

        assert_eq!(candidate.applicant_id, Some(42));
        assert_eq!(candidate.full_name.as_deref(), Some("Siti Rahma"));
        assert_eq!(candidate.total_score, 215.0);
    }
}
