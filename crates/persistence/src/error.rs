//! Store error classification.
//!
//! Repository methods translate raw sqlx failures into this taxonomy at the
//! operation boundary; callers never branch on database error text.

use thiserror::Error;

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced device does not exist.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Stored state violates an assumed invariant. Fatal, not retryable.
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    /// Transient failure communicating with the database. The caller may
    /// retry with backoff; repositories never retry on their own.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    /// Whether a retry with backoff may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Returns true for a PostgreSQL unique-constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err)
            }
            // fetch_one is only used where the row was just written or
            // locked; absence means the invariant did not hold.
            sqlx::Error::RowNotFound => {
                StoreError::DataIntegrity("expected row is missing".to_string())
            }
            sqlx::Error::Database(db) => {
                let code = db.code().map(|c| c.to_string());
                match code.as_deref() {
                    Some("23503") => StoreError::DataIntegrity(format!(
                        "foreign key violation: {}",
                        db.message()
                    )),
                    Some("23502") => StoreError::DataIntegrity(format!(
                        "not-null violation: {}",
                        db.message()
                    )),
                    Some("23505") => StoreError::DataIntegrity(format!(
                        "unique violation: {}",
                        db.message()
                    )),
                    _ => StoreError::Database(sqlx::Error::Database(db)),
                }
            }
            _ => StoreError::Database(err),
        }
    }
}
