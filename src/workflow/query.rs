//! Read step: the joined result set.

use crate::db::Repository;
use crate::domain::JoinedRow;
use crate::error::StoreError;
use tracing::debug;

/// Fetch every primary row joined with its related row.
///
/// Row order is implementation-defined; callers must not rely on it.
///
/// # Errors
/// Returns `StoreError::Query` if the join query fails.
pub async fn fetch_all(repo: &Repository) -> Result<Vec<JoinedRow>, StoreError> {
    let rows = repo.fetch_joined().await.map_err(StoreError::Query)?;
    debug!(count = rows.len(), "Fetched joined rows");
    Ok(rows)
}
