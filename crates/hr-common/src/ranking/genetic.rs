use rand::Rng;
use tracing::debug;

use super::compare;
use crate::{ApplicantRecord, Candidate};

/// Tuning knobs for the generational refinement loop.
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    /// Population capacity kept after each generation; `rank_limit` at the
    /// API boundary.
    pub target_size: usize,
    /// Number of refinement generations. Hard, finite upper bound on work.
    pub generations: u32,
    /// Probability that a freshly bred child is perturbed.
    pub mutation_rate: f64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            target_size: 10,
            generations: 10,
            mutation_rate: 0.1,
        }
    }
}

/// Generational selection/refinement over a scored population.
///
/// Not a textbook genetic algorithm: selection is truncation by the shared
/// comparator, crossover is a fixed pair walk, and only mutation draws on
/// randomness.
pub struct GeneticRanker {
    config: GeneticConfig,
}

impl Default for GeneticRanker {
    fn default() -> Self {
        Self::new(GeneticConfig::default())
    }
}

impl GeneticRanker {
    pub fn new(config: GeneticConfig) -> Self {
        Self { config }
    }

    /// Scores the raw records and runs the full
    /// selection/crossover/mutation loop.
    ///
    /// The caller supplies the random source, so a seeded generator makes
    /// the entire run reproducible. The returned population is at most
    /// `target_size` long and is expected to go through rank assignment
    /// next.
    pub fn refine<R: Rng>(&self, records: &[ApplicantRecord], rng: &mut R) -> Vec<Candidate> {
        if records.is_empty() {
            return Vec::new();
        }

        let mut population: Vec<Candidate> =
            records.iter().map(Candidate::from_record).collect();

        for generation in 0..self.config.generations {
            // Truncation selection: keep the comparator's top slice.
            population.sort_by(compare);
            population.truncate(self.config.target_size);

            let children = self.breed(&population, rng);

            debug!(
                generation,
                survivors = population.len(),
                children = children.len(),
                "generation bred"
            );

            population.extend(children);
            population.sort_by(compare);
            population.truncate(self.config.target_size);
        }

        population
    }

    /// Walks the selected list in consecutive pairs and breeds two children
    /// per complete pair. An unpaired trailing element breeds nothing.
    fn breed<R: Rng>(&self, selected: &[Candidate], rng: &mut R) -> Vec<Candidate> {
        let mut children = Vec::with_capacity(selected.len());

        for pair in selected.chunks_exact(2) {
            let (first, second) = (&pair[0], &pair[1]);

            // Child A: arithmetic mean of every criterion.
            let blended = Candidate::evaluate(
                None,
                None,
                (first.test + second.test) / 2.0,
                (first.soft_skills + second.soft_skills) / 2.0,
                (first.interview + second.interview) / 2.0,
            );

            // Child B: fixed trait swap, soft skills taken from the second
            // parent.
            let swapped = Candidate::evaluate(
                None,
                None,
                first.test,
                second.soft_skills,
                first.interview,
            );

            children.push(self.mutate(blended, rng));
            children.push(self.mutate(swapped, rng));
        }

        children
    }

    /// With probability `mutation_rate`, perturbs all three criteria of a
    /// child in one atomic event and re-scores it. Each criterion shifts by
    /// an independent integer offset in [-5, +5], clamped to [0, 100].
    fn mutate<R: Rng>(&self, child: Candidate, rng: &mut R) -> Candidate {
        if rng.gen::<f64>() >= self.config.mutation_rate {
            return child;
        }

        let test = perturb(child.test, rng);
        let soft_skills = perturb(child.soft_skills, rng);
        let interview = perturb(child.interview, rng);

        Candidate::evaluate(child.applicant_id, child.full_name, test, soft_skills, interview)
    }
}

fn perturb<R: Rng>(value: f64, rng: &mut R) -> f64 {
    (value + f64::from(rng.gen_range(-5i32..=5))).clamp(0.0, 100.0)
}
