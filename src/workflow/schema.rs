//! Schema verification step.

use crate::db::{schema, Repository};
use crate::error::StoreError;
use tracing::{debug, info};

/// Verify or create the two-table schema.
///
/// If EITHER table already exists the schema is treated as provisioned and
/// nothing is created. This is a deliberately coarse check carried over
/// from the source system: a partial schema (one table present) is left
/// untouched rather than repaired. If neither table exists, `"primary"` is
/// created before `related` so the foreign key reference resolves.
///
/// Safe to call repeatedly; a second call is a no-op.
///
/// # Errors
/// Returns `StoreError::Schema` if the existence check or a CREATE TABLE
/// fails. No partial-table cleanup is attempted.
pub async fn ensure(repo: &Repository) -> Result<(), StoreError> {
    let primary_exists = repo
        .table_exists(schema::PRIMARY_TABLE)
        .await
        .map_err(StoreError::Schema)?;
    let related_exists = repo
        .table_exists(schema::RELATED_TABLE)
        .await
        .map_err(StoreError::Schema)?;

    if primary_exists || related_exists {
        debug!("Schema already provisioned, skipping creation");
        return Ok(());
    }

    repo.create_tables().await.map_err(StoreError::Schema)?;
    info!("Schema created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect::connect;
    use tempfile::TempDir;

    async fn setup_test_db() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = connect(&db_path).await.expect("connect failed");
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_ensure_creates_both_tables() {
        let (repo, _temp) = setup_test_db().await;

        ensure(&repo).await.expect("ensure failed");

        assert!(repo.table_exists("primary").await.unwrap());
        assert!(repo.table_exists("related").await.unwrap());
    }

    #[tokio::test]
    async fn test_ensure_is_idempotent() {
        let (repo, _temp) = setup_test_db().await;

        ensure(&repo).await.expect("first ensure failed");
        ensure(&repo).await.expect("second ensure failed");

        assert!(repo.table_exists("primary").await.unwrap());
        assert!(repo.table_exists("related").await.unwrap());
    }

    #[tokio::test]
    async fn test_ensure_skips_when_either_table_exists() {
        let (repo, temp) = setup_test_db().await;

        // Pre-create only the related table. The coarse any-exists check
        // must then skip creation entirely, leaving "primary" absent.
        let db_path = temp.path().join("test.db").to_string_lossy().to_string();
        let pool = connect(&db_path).await.unwrap();
        sqlx::query("CREATE TABLE \"related\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT)")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        ensure(&repo).await.expect("ensure failed");

        assert!(repo.table_exists("related").await.unwrap());
        assert!(!repo.table_exists("primary").await.unwrap());
    }
}
