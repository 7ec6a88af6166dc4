use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::db::PgPool;
use crate::ApplicantRecord;

#[derive(Debug, thiserror::Error)]
pub enum ApplicantFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Loads every scored applicant for one job opening.
///
/// Read-only: the ranking engine never writes back, and row order is
/// irrelevant because the engine imposes its own total order. Score columns
/// are double precision in [0, 100]; anything outside that range is clamped
/// later during fuzzification rather than rejected here.
#[instrument(skip(pool))]
pub async fn fetch_applicants_for_job(
    pool: &PgPool,
    job_id: i64,
) -> Result<Vec<ApplicantRecord>, ApplicantFetchError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            "SELECT \
                r.applicant_id,\
                a.full_name,\
                r.score_test,\
                r.soft_skills,\
                r.score_interview \
            FROM rankings r \
            JOIN applicants a ON a.id = r.applicant_id \
            WHERE r.job_id = $1",
            &[&job_id],
        )
        .await?;

    let records = rows
        .into_iter()
        .map(|row| ApplicantRecord {
            applicant_id: row.get("applicant_id"),
            full_name: row.get("full_name"),
            test: row.get("score_test"),
            soft_skills: row.get("soft_skills"),
            interview: row.get("score_interview"),
        })
        .collect();

    Ok(records)
}
