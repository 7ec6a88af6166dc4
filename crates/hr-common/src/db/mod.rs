pub mod applicants;
pub mod pool;

pub use applicants::{fetch_applicants_for_job, ApplicantFetchError};
pub use pool::{create_pool_from_url, DbPoolError, PgPool};
