//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)        ValidationError (boxtrack-core)     │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError::kind() → ErrorKind → HTTP status at the boundary             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing row on lookup is `Ok(None)`, not an error. `NotFound` is only
//! produced where absence is exceptional.

use boxtrack_core::{ErrorKind, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Payload rejected before reaching SQLite.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found in database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A child names a parent that does not exist.
    ///
    /// ## When This Occurs
    /// - Unit created or moved with an unknown `roomId`
    /// - Item created or moved with an unknown `binId`
    #[error("{entity} references missing {parent}: {parent_id}")]
    MissingParent {
        entity: String,
        parent: String,
        parent_id: String,
    },

    /// Foreign key constraint violation not attributed to a known parent.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Creating a second user with the same username
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created
    /// - File permissions issue
    /// - Disk full
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

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a MissingParent error.
    pub fn missing_parent(
        entity: impl Into<String>,
        parent: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        DbError::MissingParent {
            entity: entity.into(),
            parent: parent.into(),
            parent_id: parent_id.into(),
        }
    }

    /// Classifies the error for the boundary layer.
    ///
    /// Everything below the constraint level collapses into `Storage`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::Validation(_) => ErrorKind::Validation,
            DbError::NotFound { .. } => ErrorKind::NotFound,
            DbError::MissingParent { .. } | DbError::ForeignKeyViolation { .. } => {
                ErrorKind::ReferentialIntegrity
            }
            DbError::UniqueViolation { .. } => ErrorKind::Conflict,
            DbError::ConnectionFailed(_)
            | DbError::MigrationFailed(_)
            | DbError::QueryFailed(_)
            | DbError::PoolExhausted
            | DbError::Internal(_) => ErrorKind::Storage,
        }
    }

    /// Whether this is a foreign key failure.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, DbError::ForeignKeyViolation { .. })
    }

    /// Re-attributes a bare foreign key failure to the parent that was named.
    pub(crate) fn with_parent(self, entity: &str, parent: &str, parent_id: &str) -> Self {
        if self.is_foreign_key_violation() {
            DbError::missing_parent(entity, parent, parent_id)
        } else {
            self
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
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite error messages for constraints:
                // UNIQUE constraint: "UNIQUE constraint failed: <table>.<column>"
                // FK constraint: "FOREIGN KEY constraint failed"
                if let Some(field) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        field: field.to_string(),
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
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
    fn test_kinds() {
        assert_eq!(
            DbError::from(ValidationError::required("name")).kind(),
            ErrorKind::Validation
        );
        assert_eq!(DbError::not_found("Zone", "z").kind(), ErrorKind::NotFound);
        assert_eq!(
            DbError::missing_parent("Unit", "Zone", "z").kind(),
            ErrorKind::ReferentialIntegrity
        );
        assert_eq!(DbError::PoolExhausted.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_with_parent_only_rewrites_fk_errors() {
        let fk = DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        };
        assert!(matches!(
            fk.with_parent("Unit", "Zone", "z1"),
            DbError::MissingParent { ref parent_id, .. } if parent_id == "z1"
        ));

        let other = DbError::QueryFailed("boom".to_string());
        assert!(matches!(
            other.with_parent("Unit", "Zone", "z1"),
            DbError::QueryFailed(_)
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = DbError::missing_parent("Item", "Unit", "u-1");
        assert_eq!(err.to_string(), "Item references missing Unit: u-1");
    }
}
