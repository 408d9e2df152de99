//! The sequential seed workflow.
//!
//! One run is: connect, verify schema, seed once, fetch the joined rows,
//! release the storage handle. Steps execute strictly in order; the first
//! failure short-circuits the remaining steps but the release still runs.

pub mod query;
pub mod schema;
pub mod seed;

use crate::config::{DEFAULT_DATABASE_PATH, DEFAULT_SEED_LIMIT};
use crate::db::{connect, Repository};
use crate::domain::JoinedRow;
use crate::error::StoreError;

/// Run the full workflow once against `storage_target`.
///
/// `storage_target` defaults to `example.sqlite`; `seed_limit` defaults
/// to 2. The storage handle is released exactly once before returning,
/// whether the run succeeds or any step fails.
///
/// # Errors
/// Returns the first `StoreError` encountered by any step.
pub async fn run(
    storage_target: Option<&str>,
    seed_limit: Option<i64>,
) -> Result<Vec<JoinedRow>, StoreError> {
    let path = storage_target.unwrap_or(DEFAULT_DATABASE_PATH);
    let limit = seed_limit.unwrap_or(DEFAULT_SEED_LIMIT);

    let pool = connect(path).await?;
    let repo = Repository::new(pool.clone());

    let result = run_steps(&repo, limit).await;

    // Release the handle on every path before surfacing the result.
    pool.close().await;

    result
}

async fn run_steps(repo: &Repository, limit: i64) -> Result<Vec<JoinedRow>, StoreError> {
    schema::ensure(repo).await?;
    seed::seed_one(repo, Some(limit)).await?;
    query::fetch_all(repo).await
}
