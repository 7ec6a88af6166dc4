use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use hr_common::api::{RankedCandidateDto, RankingQuery, RankingResponse};
use hr_common::db::fetch_applicants_for_job;
use hr_common::ranking::{assign, GeneticRanker};
use hr_common::run_id;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::ApiError;
use crate::SharedState;

const MAX_RANK_LIMIT: usize = 200;

/// Runs a full ranking for one job opening: fetch, refine, assign.
pub async fn rank_job(
    State(state): State<SharedState>,
    Path(job_id): Path<i64>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<RankingResponse>, ApiError> {
    let records = fetch_applicants_for_job(&state.pool, job_id).await?;

    let mut config = query.genetic_config();
    config.target_size = config.target_size.clamp(1, MAX_RANK_LIMIT);

    let ranker = GeneticRanker::new(config);
    let mut rng = StdRng::from_entropy();

    let refined = ranker.refine(&records, &mut rng);
    let ranked = assign(refined);

    let run_id = run_id::generate();
    info!(
        job_id,
        %run_id,
        applicants = records.len(),
        ranked = ranked.len(),
        "ranking run complete"
    );

    Ok(Json(RankingResponse {
        job_id,
        run_id,
        ranked_at: Utc::now(),
        candidates: ranked.iter().map(RankedCandidateDto::from).collect(),
    }))
}
