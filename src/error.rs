use thiserror::Error;

/// Errors surfaced by the seed workflow.
///
/// Every variant is terminal for a run: there is no retry, and the storage
/// handle is still released before the error reaches the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {path}: {source}")]
    Connection {
        path: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("schema verification or creation failed: {0}")]
    Schema(#[source] sqlx::Error),
    #[error("seed insert failed: {0}")]
    Integrity(#[source] sqlx::Error),
    #[error("read query failed: {0}")]
    Query(#[source] sqlx::Error),
}
