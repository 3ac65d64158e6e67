//! Storage trait for short link persistence.

use crate::domain::entities::{BatchInput, BatchOutput};
use crate::domain::errors::{BatchError, StorageError};
use async_trait::async_trait;

/// Persistence contract shared by every storage backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStorage`] - process-local map
/// - [`crate::infrastructure::persistence::FileStorage`] - JSON document on disk
/// - [`crate::infrastructure::persistence::PgStorage`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
///
/// Exactly one backend is live per process; see
/// [`crate::infrastructure::persistence::new_storage`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores `long_url` under its derived short code and returns the code.
    ///
    /// When `user_id` is given the code is also appended to that user's
    /// link list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LinkAlreadyExists`] when the code was already
    /// stored before this call. The user association is still recorded and
    /// the carried code is valid.
    ///
    /// Returns other [`StorageError`] variants on I/O or database failures.
    async fn save_long_url(
        &self,
        long_url: &str,
        user_id: Option<String>,
    ) -> Result<String, StorageError>;

    /// Looks up the long URL stored under `short_code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if not found
    async fn get_long_url(&self, short_code: &str) -> Result<Option<String>, StorageError>;

    /// Allocates a new random user id, persisting it where the backend
    /// tracks users.
    async fn create_user(&self) -> Result<String, StorageError>;

    /// Returns every short code saved by `user_id`, in save order.
    ///
    /// `Ok(None)` means the user has no recorded links.
    async fn get_user_links(&self, user_id: &str) -> Result<Option<Vec<String>>, StorageError>;

    /// Saves each record without a user association.
    ///
    /// Output has one entry per input, in input order. A record whose code
    /// already existed still yields its code.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] with the output accumulated before the
    /// failing record. Nothing is rolled back.
    async fn save_batch(&self, records: &[BatchInput]) -> Result<Vec<BatchOutput>, BatchError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Removes the link for `long_url` and its user associations.
    ///
    /// Intended for test setup; not reachable over HTTP.
    async fn delete_link(&self, long_url: &str) -> Result<(), StorageError>;
}
