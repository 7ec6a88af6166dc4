use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fuzzy::FuzzyBreakdown;
use crate::ranking::{RankedCandidate, SelectionStatus};

/// One ranked row as rendered to the caller.
///
/// Identity fields are null for candidates synthesized by the generational
/// loop; everything else is always present, including the full fuzzy
/// breakdown for audit display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidateDto {
    pub rank: usize,
    pub applicant_id: Option<i64>,
    pub full_name: Option<String>,
    pub test: f64,
    pub soft_skills: f64,
    pub interview: f64,
    pub total_score: f64,
    pub final_score: f64,
    pub status: SelectionStatus,
    pub details: FuzzyBreakdown,
}

impl From<&RankedCandidate> for RankedCandidateDto {
    fn from(ranked: &RankedCandidate) -> Self {
        let candidate = &ranked.candidate;

        Self {
            rank: ranked.rank,
            applicant_id: candidate.applicant_id,
            full_name: candidate.full_name.clone(),
            test: candidate.test,
            soft_skills: candidate.soft_skills,
            interview: candidate.interview,
            total_score: candidate.total_score,
            final_score: candidate.final_score,
            status: ranked.status,
            details: candidate.details,
        }
    }
}

/// Full response of one ranking invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub job_id: i64,
    /// Fresh ULID identifying this ranking run.
    pub run_id: String,
    pub ranked_at: DateTime<Utc>,
    pub candidates: Vec<RankedCandidateDto>,
}
