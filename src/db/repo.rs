//! Repository layer for database operations.
//!
//! Raw storage operations over the pool. Error classification into the
//! workflow's `StoreError` kinds happens in the workflow steps, not here.

use crate::db::schema::{self, quote_ident};
use crate::domain::{JoinedRow, PrimaryRecord, RelatedRecord};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::debug;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Check whether a table exists in the database.
    ///
    /// # Errors
    /// Returns an error if the catalog query fails.
    pub async fn table_exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Create every table of the static model, in declaration order.
    ///
    /// No cleanup is attempted if a later statement fails; a partially
    /// created schema is left as-is and surfaced to the caller.
    ///
    /// # Errors
    /// Returns an error if any CREATE TABLE fails.
    pub async fn create_tables(&self) -> Result<(), sqlx::Error> {
        for table in schema::tables() {
            let sql = table.create_table_sql();
            debug!(table = table.name, "Creating table");
            sqlx::query(&sql).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Current maximum id in the primary table; 0 when the table is empty.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn max_primary_id(&self) -> Result<i64, sqlx::Error> {
        let sql = format!(
            "SELECT MAX({}) AS max_id FROM {}",
            quote_ident("id"),
            quote_ident(schema::PRIMARY_TABLE)
        );
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;

        Ok(row.get::<Option<i64>, _>("max_id").unwrap_or(0))
    }

    /// Insert one primary row and its paired related row.
    ///
    /// Both inserts run in a single transaction, so a failure between them
    /// cannot leave an orphaned primary row; the related row's foreign key
    /// is taken from the primary insert's rowid within the same transaction.
    /// Returns the created pair with their assigned ids.
    ///
    /// # Errors
    /// Returns an error if either insert or the commit fails.
    pub async fn insert_pair(
        &self,
        primary_prop: &str,
        related_prop: &str,
    ) -> Result<(PrimaryRecord, RelatedRecord), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let insert_primary = format!(
            "INSERT INTO {} ({}) VALUES (?)",
            quote_ident(schema::PRIMARY_TABLE),
            quote_ident("primary_prop")
        );
        let result = sqlx::query(&insert_primary)
            .bind(primary_prop)
            .execute(&mut *tx)
            .await?;
        let primary_id = result.last_insert_rowid();

        let insert_related = format!(
            "INSERT INTO {} ({}, {}) VALUES (?, ?)",
            quote_ident(schema::RELATED_TABLE),
            quote_ident("primary_id"),
            quote_ident("related_prop")
        );
        let result = sqlx::query(&insert_related)
            .bind(primary_id)
            .bind(related_prop)
            .execute(&mut *tx)
            .await?;
        let related_id = result.last_insert_rowid();

        tx.commit().await?;

        debug!(primary_id, related_id, "Inserted row pair");
        Ok((
            PrimaryRecord {
                id: primary_id,
                primary_prop: primary_prop.to_string(),
            },
            RelatedRecord {
                id: related_id,
                primary_id,
                related_prop: related_prop.to_string(),
            },
        ))
    }

    /// Every primary row joined with its related row, all columns of both.
    ///
    /// The join clause is derived from the declared relation. No ORDER BY:
    /// row order is implementation-defined.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn fetch_joined(&self) -> Result<Vec<JoinedRow>, sqlx::Error> {
        let rel = schema::relation();
        let sql = format!(
            "SELECT {from}.{id} AS primary_id, {from}.{pprop} AS primary_prop, \
             {to}.{id} AS related_id, {to}.{rprop} AS related_prop \
             FROM {from} JOIN {to} ON {to}.{fk} = {from}.{key}",
            from = quote_ident(rel.from_table),
            to = quote_ident(rel.to_table),
            id = quote_ident("id"),
            pprop = quote_ident("primary_prop"),
            rprop = quote_ident("related_prop"),
            fk = quote_ident(rel.to_column),
            key = quote_ident(rel.from_column),
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| JoinedRow {
                primary_id: row.get("primary_id"),
                primary_prop: row.get("primary_prop"),
                related_id: row.get("related_id"),
                related_prop: row.get("related_prop"),
            })
            .collect())
    }
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
    async fn test_table_exists_before_and_after_creation() {
        let (repo, _temp) = setup_test_db().await;

        assert!(!repo.table_exists("primary").await.unwrap());
        assert!(!repo.table_exists("related").await.unwrap());

        repo.create_tables().await.expect("create_tables failed");

        assert!(repo.table_exists("primary").await.unwrap());
        assert!(repo.table_exists("related").await.unwrap());
    }

    #[tokio::test]
    async fn test_max_primary_id_empty_table_is_zero() {
        let (repo, _temp) = setup_test_db().await;
        repo.create_tables().await.unwrap();

        assert_eq!(repo.max_primary_id().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_pair_links_foreign_key() {
        let (repo, _temp) = setup_test_db().await;
        repo.create_tables().await.unwrap();

        let (primary, related) = repo
            .insert_pair("Row 1 primary property", "Row 1 related property")
            .await
            .expect("insert_pair failed");
        assert_eq!(primary.id, 1);
        assert_eq!(related.primary_id, primary.id);
        assert_eq!(related.related_prop, "Row 1 related property");

        let rows = repo.fetch_joined().await.expect("fetch_joined failed");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary_id, 1);
        assert_eq!(rows[0].primary_prop, "Row 1 primary property");
        assert_eq!(rows[0].related_prop, "Row 1 related property");
    }

    #[tokio::test]
    async fn test_insert_pair_ids_are_monotonic() {
        let (repo, _temp) = setup_test_db().await;
        repo.create_tables().await.unwrap();

        for expected in 1..=3 {
            let before = repo.max_primary_id().await.unwrap();
            let (primary, _) = repo.insert_pair("p", "r").await.unwrap();
            assert_eq!(primary.id, before + 1);
            assert_eq!(primary.id, expected);
        }
    }

    #[tokio::test]
    async fn test_fetch_joined_empty_schema_rows() {
        let (repo, _temp) = setup_test_db().await;
        repo.create_tables().await.unwrap();

        let rows = repo.fetch_joined().await.unwrap();
        assert!(rows.is_empty());
    }
}
