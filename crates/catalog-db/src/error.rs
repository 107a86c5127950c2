//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (catalog-core)     SQLite Error (sqlx::Error)         │
//! │       │                                   │                             │
//! │       └───────────────┬───────────────────┘                             │
//! │                       ▼                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  Caller (no retries happen in this crate)                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup misses are not errors: finders return `Ok(None)` or an empty `Vec`.

use catalog_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The entity failed validation before any SQL ran.
    ///
    /// ## When This Occurs
    /// - `update()` / `delete()` on a product with no id
    /// - `create()` on a product that already has an id
    /// - Empty name, over-long description
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A write targeted a row that does not exist.
    ///
    /// ## When This Occurs
    /// - `update()` for an id whose row was deleted
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// NOT NULL, CHECK or UNIQUE constraint violation.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// A stored value could not be mapped back into the domain type.
    ///
    /// ## When This Occurs
    /// - `category` column holds a name the enum does not know
    /// - `price` column holds text that is not a valid price
    #[error("Corrupt {column} value in row {id}: {reason}")]
    CorruptRow {
        id: i64,
        column: String,
        reason: String,
    },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Configuration could not be read from the environment.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a CorruptRow error.
    pub fn corrupt(id: i64, column: impl Into<String>, reason: impl ToString) -> Self {
        DbError::CorruptRow {
            id,
            column: column.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraint failures as
                // "<KIND> constraint failed: <detail>"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_db_error() {
        let err: DbError = ValidationError::required("name").into();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name is required");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[test]
    fn test_pool_errors() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_corrupt_row_message() {
        let err = DbError::corrupt(7, "category", "unknown name 'SHOES'");
        assert_eq!(
            err.to_string(),
            "Corrupt category value in row 7: unknown name 'SHOES'"
        );
    }
}
