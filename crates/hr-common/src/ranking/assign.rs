use std::fmt;

use serde::{Deserialize, Serialize};

use super::compare;
use crate::Candidate;

/// Strict pass threshold on the defuzzified selection score.
pub const PASS_THRESHOLD: f64 = 0.50;

/// Pass/fail label derived from the final score; never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStatus {
    Pass,
    Fail,
}

impl SelectionStatus {
    /// Pass requires strictly exceeding the threshold; exactly 0.50 fails.
    pub fn from_final_score(final_score: f64) -> Self {
        if final_score > PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// A candidate with its final position in the ranking run.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    /// 1-based, unique within the run.
    pub rank: usize,
    pub status: SelectionStatus,
}

/// Totally orders the population and labels every entry.
///
/// Works on any scored population, refined or not. Ranks are a permutation
/// of `1..=N` in comparator order; the stable sort keeps the incoming order
/// for candidates tied on all five keys.
pub fn assign(mut population: Vec<Candidate>) -> Vec<RankedCandidate> {
    population.sort_by(compare);

    population
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let status = SelectionStatus::from_final_score(candidate.final_score);
            RankedCandidate {
                candidate,
                rank: index + 1,
                status,
            }
        })
        .collect()
}
