//! Storage error taxonomy.

use crate::domain::entities::BatchOutput;

/// Errors produced by [`crate::domain::repositories::Storage`] implementations.
///
/// [`StorageError::LinkAlreadyExists`] is a control-flow signal rather than a
/// failure: the short code it carries is valid and was stored by an earlier
/// call. [`StorageError::HashCollision`] means a different URL already owns
/// the code; the first URL keeps it. Every other variant is an unexpected I/O, encoding or database
/// failure and is propagated to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("link already exists: {short_code}")]
    LinkAlreadyExists { short_code: String },

    #[error("short code {short_code} is already taken by another URL")]
    HashCollision { short_code: String },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    pub fn link_exists(short_code: impl Into<String>) -> Self {
        Self::LinkAlreadyExists {
            short_code: short_code.into(),
        }
    }

    pub fn hash_collision(short_code: impl Into<String>) -> Self {
        Self::HashCollision {
            short_code: short_code.into(),
        }
    }

    /// Returns true for the "already stored" signal.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::LinkAlreadyExists { .. })
    }

    /// Returns the short code carried by a conflict, if any.
    pub fn existing_code(&self) -> Option<&str> {
        match self {
            Self::LinkAlreadyExists { short_code } => Some(short_code),
            _ => None,
        }
    }
}

/// Failure of a batch save.
///
/// Batches are not atomic: records before the failing one stay persisted and
/// their results are returned in `partial`.
#[derive(Debug, thiserror::Error)]
#[error("batch save failed after {} records: {source}", partial.len())]
pub struct BatchError {
    #[source]
    pub source: StorageError,
    pub partial: Vec<BatchOutput>,
}

impl BatchError {
    pub fn new(source: StorageError, partial: Vec<BatchOutput>) -> Self {
        Self { source, partial }
    }
}
