//! JSON flat-file storage backend.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use super::tables::{Tables, save_each, save_outcome};
use crate::domain::entities::{BatchInput, BatchOutput, Link, User};
use crate::domain::errors::{BatchError, StorageError};
use crate::domain::repositories::Storage;

/// Storage kept in a single JSON document on disk.
///
/// Every call re-reads and parses the whole file; every write rewrites it
/// in full. The mutex only excludes concurrent access from this process:
/// there is no cross-process locking and no atomic rename, so a crash in
/// the middle of a write can leave a truncated file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Opens the storage file, creating an empty one if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be created or
    /// inspected, e.g. when its directory is missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the whole file. An empty or blank file is an empty store.
    async fn read_tables(&self) -> Result<Tables, StorageError> {
        let content = fs::read(&self.path).await?;

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Tables::default());
        }

        Ok(serde_json::from_slice(&content)?)
    }

    async fn write_tables(&self, tables: &Tables) -> Result<(), StorageError> {
        let content = serde_json::to_vec_pretty(tables)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn save_long_url(
        &self,
        long_url: &str,
        user_id: Option<String>,
    ) -> Result<String, StorageError> {
        let link = Link::new(long_url);
        let short_code = link.short_code.clone();

        let _guard = self.lock.lock().await;
        let mut tables = self.read_tables().await?;
        let existed = tables.insert(link, user_id.as_deref())?;
        self.write_tables(&tables).await?;

        tracing::debug!(%short_code, existed, path = %self.path.display(), "Saved link to file");

        save_outcome(short_code, existed)
    }

    async fn get_long_url(&self, short_code: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_tables().await?.long_url(short_code))
    }

    async fn create_user(&self) -> Result<String, StorageError> {
        Ok(User::generate().id)
    }

    async fn get_user_links(&self, user_id: &str) -> Result<Option<Vec<String>>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_tables().await?.user_links(user_id))
    }

    async fn save_batch(&self, records: &[BatchInput]) -> Result<Vec<BatchOutput>, BatchError> {
        save_each(records, |url| async move { self.save_long_url(&url, None).await }).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        fs::metadata(&self.path).await?;
        Ok(())
    }

    async fn delete_link(&self, long_url: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut tables = self.read_tables().await?;
        tables.remove(long_url);
        self.write_tables(&tables).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn open_temp() -> (TempDir, FileStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("storage.json"))
            .await
            .unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn test_open_creates_empty_file() {
        let (_dir, storage) = open_temp().await;

        assert!(storage.path().exists());
        assert!(storage.get_long_url("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = FileStorage::open(dir.path().join("missing").join("storage.json")).await;

        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let (_dir, storage) = open_temp().await;

        let code = storage.save_long_url("https://ya1.ru", None).await.unwrap();

        assert_eq!(code, "3144338548");
        assert_eq!(
            storage.get_long_url(&code).await.unwrap().as_deref(),
            Some("https://ya1.ru")
        );
    }

    #[tokio::test]
    async fn test_second_save_is_conflict() {
        let (_dir, storage) = open_temp().await;

        storage.save_long_url("https://ya1.ru", None).await.unwrap();
        let err = storage
            .save_long_url("https://ya1.ru", None)
            .await
            .unwrap_err();

        assert_eq!(err.existing_code(), Some("3144338548"));
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let (dir, storage) = open_temp().await;
        let code = storage
            .save_long_url("https://ya5.ru", Some("u1".to_string()))
            .await
            .unwrap();
        drop(storage);

        let reopened = FileStorage::open(dir.path().join("storage.json"))
            .await
            .unwrap();

        assert_eq!(
            reopened.get_long_url(&code).await.unwrap().as_deref(),
            Some("https://ya5.ru")
        );
        assert_eq!(
            reopened.get_user_links("u1").await.unwrap(),
            Some(vec![code])
        );
    }

    #[tokio::test]
    async fn test_file_layout() {
        let (_dir, storage) = open_temp().await;
        storage
            .save_long_url("aaa", Some("u1".to_string()))
            .await
            .unwrap();

        let content = std::fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["links"]["1184641920"], "aaa");
        assert_eq!(value["user_links"]["u1"], serde_json::json!(["1184641920"]));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_failure() {
        let (_dir, storage) = open_temp().await;
        std::fs::write(storage.path(), "{not json").unwrap();

        let err = storage.get_long_url("1").await.unwrap_err();

        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_save_batch_in_order() {
        let (_dir, storage) = open_temp().await;
        let records = vec![
            BatchInput::new("111", "http://lelik.ru"),
            BatchInput::new("222", "http://bolik.ru"),
        ];

        let output = storage.save_batch(&records).await.unwrap();

        assert_eq!(output[0].short_url, "3799407019");
        assert_eq!(output[1].short_url, "2114288767");
        assert_eq!(output[1].correlation_id, "222");
    }

    #[tokio::test]
    async fn test_delete_link() {
        let (_dir, storage) = open_temp().await;
        let code = storage.save_long_url("https://ya.ru", None).await.unwrap();

        storage.delete_link("https://ya.ru").await.unwrap();

        assert!(storage.get_long_url(&code).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_are_not_lost() {
        let (_dir, storage) = open_temp().await;
        let storage = Arc::new(storage);

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let storage = storage.clone();
                tokio::spawn(async move {
                    storage
                        .save_long_url(&format!("https://site{i}.example"), None)
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        for i in 0..32 {
            let url = format!("https://site{i}.example");
            let code = Link::new(url.as_str()).short_code;
            assert_eq!(storage.get_long_url(&code).await.unwrap(), Some(url));
        }
    }
}
