use serde::Deserialize;

use crate::ranking::GeneticConfig;

/// Query parameters accepted by the ranking invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingQuery {
    /// Capacity of the refined population; becomes the loop's target size.
    #[serde(default = "default_rank_limit")]
    pub rank_limit: usize,
    #[serde(default = "default_generations")]
    pub generations: u32,
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Reserved filter parameter. Accepted at the boundary but has no effect
    /// on the ranking computation.
    #[serde(default)]
    pub score_range: Option<String>,
}

const fn default_rank_limit() -> usize {
    10
}

const fn default_generations() -> u32 {
    10
}

fn default_mutation_rate() -> f64 {
    0.1
}

impl Default for RankingQuery {
    fn default() -> Self {
        Self {
            rank_limit: default_rank_limit(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            score_range: None,
        }
    }
}

impl RankingQuery {
    /// Translates the boundary parameters into the engine configuration.
    /// The mutation rate is a probability and is clamped accordingly.
    pub fn genetic_config(&self) -> GeneticConfig {
        GeneticConfig {
            target_size: self.rank_limit,
            generations: self.generations,
            mutation_rate: self.mutation_rate.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine_defaults() {
        let config = RankingQuery::default().genetic_config();
        let engine_default = GeneticConfig::default();

        assert_eq!(config.target_size, engine_default.target_size);
        assert_eq!(config.generations, engine_default.generations);
        assert_eq!(config.mutation_rate, engine_default.mutation_rate);
    }

    #[test]
    fn mutation_rate_is_clamped_to_a_probability() {
        let query = RankingQuery {
            mutation_rate: 3.5,
            ..RankingQuery::default()
        };

        assert_eq!(query.genetic_config().mutation_rate, 1.0);
    }

    #[test]
    fn score_range_is_carried_but_unused() {
        let query = RankingQuery {
            score_range: Some("80-100".into()),
            ..RankingQuery::default()
        };

        let with = query.genetic_config();
        let without = RankingQuery::default().genetic_config();

        assert_eq!(with.target_size, without.target_size);
        assert_eq!(with.generations, without.generations);
        assert_eq!(with.mutation_rate, without.mutation_rate);
    }
}
