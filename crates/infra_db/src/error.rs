//! Database error types
//!
//! This module defines the error types that can occur during database operations
//! and their translation into the port-level `PortError`.

use thiserror::Error;

use core_kernel::PortError;

/// Name of the unique constraint on `customer.email`
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "customer_email_unique";

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation, tagged with the violated constraint when known
    #[error("Duplicate entry: {message}")]
    DuplicateEntry {
        constraint: Option<String>,
        message: String,
    },

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Checks if this error is a violation of the unique email constraint
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::DuplicateEntry {
    ///     constraint: Some("customer_email_unique".to_string()),
    ///     message: "duplicate key value".to_string(),
    /// };
    /// assert!(error.is_email_conflict());
    /// ```
    pub fn is_email_conflict(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry { constraint: Some(name), .. } if name == EMAIL_UNIQUE_CONSTRAINT
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Maps SQLx errors to DatabaseError variants based on the PostgreSQL error code
///
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                DatabaseError::ConnectionFailed(error.to_string())
            }
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => DatabaseError::DuplicateEntry {
                    constraint: db_err.constraint().map(str::to_string),
                    message: db_err.message().to_string(),
                },
                _ => DatabaseError::QueryFailed(db_err.message().to_string()),
            },
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationFailed(error.to_string())
    }
}

/// Translates database failures into the port error the domain understands
///
/// Only the email constraint is a caller conflict; any other duplicate key
/// (a primary key clash, for one) is an internal failure.
impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        if error.is_email_conflict() {
            return PortError::conflict(error.to_string());
        }
        match error {
            DatabaseError::ConnectionFailed(message) => PortError::connection(message),
            DatabaseError::PoolExhausted => PortError::Timeout {
                operation: "acquire connection".to_string(),
                duration_ms: 0,
            },
            other => PortError::Internal {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}
