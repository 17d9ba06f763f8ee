//! Shared error types for the scan engine
//!
//! Layered the way the rest of the crate is layered: a leaf error enum per
//! concern, composed into a single top-level error via `#[from]`.

use thiserror::Error;

/// Errors surfaced by `Store` collaborators.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() || db_err.is_check_violation() {
                    RepositoryError::ConstraintViolation(db_err.message().to_string())
                } else {
                    RepositoryError::Database(db_err.message().to_string())
                }
            }
            sqlx::Error::RowNotFound => RepositoryError::NotFound("row not found".to_string()),
            sqlx::Error::PoolTimedOut => {
                RepositoryError::Connection("connection pool timeout".to_string())
            }
            sqlx::Error::PoolClosed => {
                RepositoryError::Connection("connection pool closed".to_string())
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}

/// Errors surfaced by `Walker` collaborators.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("path traversal: {0}")]
    PathTraversal(String),

    #[error("walk error: {0}")]
    WalkError(String),
}

/// Errors surfaced by `Hasher` collaborators.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a file: {0}")]
    NotAFile(String),
}

/// Errors surfaced by the Manager.
#[derive(Debug, Clone, Error)]
pub enum ManagerError {
    #[error("library not found: {0}")]
    LibraryNotFound(String),

    #[error("scan job not found: {0}")]
    ScanJobNotFound(String),

    #[error("scan already running for library: {0}")]
    ScanAlreadyRunning(String),

    #[error("job is not paused or failed: {0}")]
    NotPaused(String),

    #[error("manager is shutting down")]
    ShuttingDown,

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors surfaced by a single Library Scanner run.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan job not found: {0}")]
    JobNotFound(String),

    #[error("fatal traversal error: {0}")]
    FatalTraversal(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] RepositoryError),

    #[error("filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

/// Top-level error composing every leaf error the core can produce.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    #[error("hash error: {0}")]
    Hash(#[from] HashError),

    #[error("manager error: {0}")]
    Manager(#[from] ManagerError),

    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("configuration error: {0}")]
    Configuration(String),
}
