//! In-memory storage backend.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::tables::{Tables, save_each, save_outcome};
use crate::domain::entities::{BatchInput, BatchOutput, Link, User};
use crate::domain::errors::{BatchError, StorageError};
use crate::domain::repositories::Storage;

/// Process-local storage; contents are lost on exit.
///
/// One mutex guards both tables and every operation, reads included, holds
/// it for its whole duration.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn save_long_url(
        &self,
        long_url: &str,
        user_id: Option<String>,
    ) -> Result<String, StorageError> {
        let link = Link::new(long_url);
        let short_code = link.short_code.clone();

        let existed = self.tables.lock().await.insert(link, user_id.as_deref())?;
        tracing::debug!(%short_code, existed, "Saved link in memory");

        save_outcome(short_code, existed)
    }

    async fn get_long_url(&self, short_code: &str) -> Result<Option<String>, StorageError> {
        Ok(self.tables.lock().await.long_url(short_code))
    }

    async fn create_user(&self) -> Result<String, StorageError> {
        Ok(User::generate().id)
    }

    async fn get_user_links(&self, user_id: &str) -> Result<Option<Vec<String>>, StorageError> {
        Ok(self.tables.lock().await.user_links(user_id))
    }

    async fn save_batch(&self, records: &[BatchInput]) -> Result<Vec<BatchOutput>, BatchError> {
        save_each(records, |url| async move { self.save_long_url(&url, None).await }).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete_link(&self, long_url: &str) -> Result<(), StorageError> {
        self.tables.lock().await.remove(long_url);
        Ok(())
    }
}
