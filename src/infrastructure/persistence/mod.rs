//! Storage backend implementations and the backend factory.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - Mutex-guarded maps, lost on exit
//! - [`FileStorage`] - Whole-document JSON file rewritten on every save
//! - [`PgStorage`] - PostgreSQL via SQLx
//!
//! [`new_storage`] picks exactly one of them at startup.

pub mod file_storage;
pub mod memory_storage;
pub mod pg_storage;
mod tables;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use pg_storage::PgStorage;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::{Config, StorageKind};
use crate::domain::repositories::Storage;

/// Builds the storage backend selected by `config`.
///
/// Priority: database DSN, then file path, then in-memory.
///
/// # Errors
///
/// Returns an error if the database is unreachable, its migrations fail, or
/// the storage file cannot be created. The service must not start in that
/// state.
pub async fn new_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage: Arc<dyn Storage> = match config.storage_kind() {
        StorageKind::Database(dsn) => {
            let storage = PgStorage::connect(dsn, config.db_max_connections)
                .await
                .context("Failed to initialise database storage")?;
            tracing::info!("Storage: PostgreSQL");
            Arc::new(storage)
        }
        StorageKind::File(path) => {
            let storage = FileStorage::open(path).await.with_context(|| {
                format!("Failed to open storage file '{}'", path.display())
            })?;
            tracing::info!("Storage: file {}", path.display());
            Arc::new(storage)
        }
        StorageKind::Memory => {
            tracing::info!("Storage: in-memory");
            Arc::new(MemoryStorage::new())
        }
    };

    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn memory_config() -> Config {
        let mut config = Config::try_parse_from(["url-shortener"]).unwrap();
        config.database_dsn = None;
        config.file_storage_path = None;
        config
    }

    #[tokio::test]
    async fn test_memory_by_default() {
        let storage = new_storage(&memory_config()).await.unwrap();

        let code = storage.save_long_url("aaa", None).await.unwrap();
        assert_eq!(code, "1184641920");
    }

    #[tokio::test]
    async fn test_file_when_path_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        let mut cfg = memory_config();
        cfg.file_storage_path = Some(path.clone());

        let storage = new_storage(&cfg).await.unwrap();
        storage.save_long_url("bbb", None).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("496612573"));
    }

    #[tokio::test]
    async fn test_unopenable_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = memory_config();
        cfg.file_storage_path = Some(dir.path().join("no-such-dir").join("links.json"));

        assert!(new_storage(&cfg).await.is_err());
    }
}
