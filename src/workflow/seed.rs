//! Seed step: one linked row pair per invocation, under an optional cap.

use crate::db::Repository;
use crate::error::StoreError;
use tracing::{debug, info};

/// Insert the next primary/related row pair, unless the cap is reached.
///
/// The next sequence number is one plus the current maximum primary id
/// (an empty table counts as maximum 0). When `limit` is set and the next
/// number would exceed it, the call is a silent no-op and still succeeds;
/// the cap simply stops further growth.
///
/// # Errors
/// Returns `StoreError::Query` if the maximum-id read fails, or
/// `StoreError::Integrity` if the paired insert fails.
pub async fn seed_one(repo: &Repository, limit: Option<i64>) -> Result<(), StoreError> {
    let max_id = repo.max_primary_id().await.map_err(StoreError::Query)?;
    let next = max_id + 1;

    if let Some(cap) = limit {
        if next > cap {
            debug!(next, cap, "Seed cap reached, skipping insert");
            return Ok(());
        }
    }

    let primary_prop = format!("Row {} primary property", next);
    let related_prop = format!("Row {} related property", next);

    let (primary, related) = repo
        .insert_pair(&primary_prop, &related_prop)
        .await
        .map_err(StoreError::Integrity)?;

    info!(
        primary_id = primary.id,
        related_id = related.id,
        "Seeded row pair"
    );
    Ok(())
}
