pub mod assign;
pub mod genetic;

pub use assign::{assign, RankedCandidate, SelectionStatus, PASS_THRESHOLD};
pub use genetic::{GeneticConfig, GeneticRanker};

use std::cmp::Ordering;

use crate::Candidate;

/// The single ordering used everywhere a population is sorted: by the
/// generational loop each generation and by the final rank assignment.
///
/// Five descending keys: final score, total score, interview, soft skills,
/// test. Candidates equal on all five are genuinely tied; `sort_by` is
/// stable, so their incoming order is preserved.
pub fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    b.final_score
        .partial_cmp(&a.final_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            b.interview
                .partial_cmp(&a.interview)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            b.soft_skills
                .partial_cmp(&a.soft_skills)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| b.test.partial_cmp(&a.test).unwrap_or(Ordering::Equal))
}
