//! Database query timeout helpers
//!
//! Provides timeout wrappers for database operations to prevent indefinite hangs.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Default timeout for database queries (5 seconds)
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for transactions (10 seconds)
pub const DEFAULT_TRANSACTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    /// Operation timed out
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Execute a single query with timeout
///
/// # Example
///
/// ```no_run
/// use swiss_tournament::db::timeouts::{with_timeout, DEFAULT_QUERY_TIMEOUT};
/// # use sqlx::PgPool;
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
///
/// let result = with_timeout(
///     DEFAULT_QUERY_TIMEOUT,
///     sqlx::query("SELECT * FROM players WHERE id = $1")
///         .bind(1_i64)
///         .fetch_one(pool)
/// ).await?;
///
/// # Ok(())
/// # }
/// ```
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> StorageResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match timeout(duration, future).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => Err(StorageError::Database(e)),
        Err(_) => Err(StorageError::Timeout(duration)),
    }
}

/// Execute a single query with the default timeout (5 seconds)
pub async fn with_default_timeout<F, T>(future: F) -> StorageResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    with_timeout(DEFAULT_QUERY_TIMEOUT, future).await
}

/// Bound a whole transaction scope by `duration`.
///
/// Unlike [`with_timeout`] the scope may fail with any error that can carry a
/// [`StorageError`], so domain errors raised mid-transaction pass through
/// unchanged. Dropping the scope on timeout drops its open transaction, which
/// rolls it back.
pub async fn with_transaction_timeout<F, T, E>(duration: Duration, scope: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<StorageError>,
{
    match timeout(duration, scope).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout(duration).into()),
    }
}
